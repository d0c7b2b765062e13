//! Geometric primitives for topology layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate (or displacement vector) in canvas space
//! - [`Size`] - Width and height of a canvas
//! - [`Bounds`] - An axis-aligned rectangle used as the placement area
//!
//! # Coordinate System
//!
//! Canvas coordinates follow the SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Bands with a smaller vertical fraction therefore sit closer to the top of
//! the rendered diagram.

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinate space.
///
/// Points double as displacement vectors inside the force simulation, so the
/// type carries the small amount of vector math the engine needs.
///
/// # Examples
///
/// ```
/// # use netlayout_core::geometry::Point;
/// let a = Point::new(3.0, 0.0);
/// let b = Point::new(0.0, 4.0);
///
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(a.add_point(b), Point::new(3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (length of the vector from the origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Returns `None` for the zero vector, which has no direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use netlayout_core::geometry::Point;
    /// let unit = Point::new(0.0, -8.0).normalize().unwrap();
    /// assert_eq!(unit, Point::new(0.0, -1.0));
    ///
    /// assert!(Point::default().normalize().is_none());
    /// ```
    pub fn normalize(self) -> Option<Self> {
        let length = self.hypot();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(self.scale(1.0 / length))
    }
}

/// Width and height of a drawing surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Checks if either dimension is zero or negative
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// The layout engine uses it for the canvas interior: the canvas shrunk by
/// the configured margin on every side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds covering a surface of `size` anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: size.width(),
            max_y: size.height(),
        }
    }

    /// Returns the minimum x-coordinate (left edge)
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (top edge)
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate (right edge)
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (bottom edge)
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Shrinks the bounds by `margin` on every side.
    ///
    /// A margin larger than half of a dimension collapses that dimension
    /// onto its center line instead of producing inverted bounds.
    pub fn shrink(self, margin: f32) -> Self {
        let (min_x, max_x) = shrink_axis(self.min_x, self.max_x, margin);
        let (min_y, max_y) = shrink_axis(self.min_y, self.max_y, margin);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Checks whether a point lies inside the bounds (edges included)
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Projects a point onto the closest location inside the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use netlayout_core::geometry::{Bounds, Point, Size};
    /// let interior = Bounds::from_size(Size::new(100.0, 50.0)).shrink(10.0);
    ///
    /// let clamped = interior.clamp_point(Point::new(-5.0, 45.0));
    /// assert_eq!(clamped, Point::new(10.0, 40.0));
    /// ```
    pub fn clamp_point(self, point: Point) -> Point {
        Point::new(
            point.x().clamp(self.min_x, self.max_x),
            point.y().clamp(self.min_y, self.max_y),
        )
    }
}

fn shrink_axis(min: f32, max: f32, margin: f32) -> (f32, f32) {
    let (lo, hi) = (min + margin, max - margin);
    if lo <= hi {
        (lo, hi)
    } else {
        let center = (min + max) / 2.0;
        (center, center)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-5000.0f32..5000.0, -5000.0f32..5000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (100.0f32..3000.0, 100.0f32..3000.0, 0.0f32..200.0)
            .prop_map(|(w, h, margin)| Bounds::from_size(Size::new(w, h)).shrink(margin))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Clamping always lands inside the bounds.
    fn check_clamp_is_contained(bounds: Bounds, point: Point) -> Result<(), TestCaseError> {
        prop_assert!(bounds.contains(bounds.clamp_point(point)));
        Ok(())
    }

    /// Clamping twice is the same as clamping once.
    fn check_clamp_is_idempotent(bounds: Bounds, point: Point) -> Result<(), TestCaseError> {
        let once = bounds.clamp_point(point);
        let twice = bounds.clamp_point(once);
        prop_assert_eq!(once, twice);
        Ok(())
    }

    /// Distance is symmetric.
    fn check_distance_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(f32, p1.distance(p2), p2.distance(p1)));
        Ok(())
    }

    /// Normalized vectors have unit length.
    fn check_normalize_has_unit_length(p: Point) -> Result<(), TestCaseError> {
        if let Some(unit) = p.normalize() {
            prop_assert!(approx_eq!(f32, unit.hypot(), 1.0, epsilon = 1e-4));
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn clamp_is_contained(bounds in bounds_strategy(), point in point_strategy()) {
            check_clamp_is_contained(bounds, point)?;
        }

        #[test]
        fn clamp_is_idempotent(bounds in bounds_strategy(), point in point_strategy()) {
            check_clamp_is_idempotent(bounds, point)?;
        }

        #[test]
        fn distance_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_is_symmetric(p1, p2)?;
        }

        #[test]
        fn normalize_has_unit_length(p in point_strategy()) {
            check_normalize_has_unit_length(p)?;
        }
    }
}
