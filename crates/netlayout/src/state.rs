//! The position map owned by a single layout computation.

use indexmap::IndexMap;

use netlayout_core::geometry::{Bounds, Point};

/// Positions of every laid-out entity, keyed by entity id.
///
/// A `LayoutState` is created by the placer and moved through each pipeline
/// stage in turn; no stage keeps it after returning. Iteration follows
/// insertion order (devices band by band, then networks), which makes overlap
/// detection order deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    positions: IndexMap<String, Point>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets the position of an entity, returning the previous one if any.
    pub fn insert(&mut self, id: impl Into<String>, position: Point) -> Option<Point> {
        self.positions.insert(id.into(), position)
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `id` in iteration order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.positions.get_index_of(id)
    }

    /// Id of the entity at `index` in iteration order.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.positions.get_index(index).map(|(id, _)| id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(id, point)| (id.as_str(), *point))
    }

    /// Positions in iteration order.
    pub(crate) fn points(&self) -> Vec<Point> {
        self.positions.values().copied().collect()
    }

    /// Overwrites all positions, in iteration order.
    pub(crate) fn set_points(&mut self, points: &[Point]) {
        debug_assert_eq!(points.len(), self.positions.len());
        for (slot, point) in self.positions.values_mut().zip(points) {
            *slot = *point;
        }
    }

    pub(crate) fn point_at(&self, index: usize) -> Point {
        self.positions[index]
    }

    pub(crate) fn set_point_at(&mut self, index: usize, point: Point) {
        self.positions[index] = point;
    }

    /// Checks that every position lies inside `bounds`.
    pub fn is_within(&self, bounds: Bounds) -> bool {
        self.positions.values().all(|point| bounds.contains(*point))
    }
}

impl FromIterator<(String, Point)> for LayoutState {
    fn from_iter<I: IntoIterator<Item = (String, Point)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
