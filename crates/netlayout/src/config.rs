//! Configuration types for topology layout.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a configuration file only needs to mention the values it overrides.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root (currently just `[layout]`).
//! - [`LayoutConfig`] - Canvas geometry and layout algorithm parameters.
//!
//! # Example
//!
//! ```
//! # use netlayout::config::LayoutConfig;
//! let config = LayoutConfig::default()
//!     .with_canvas_size(1600.0, 900.0)
//!     .with_seed(7);
//!
//! assert_eq!(config.canvas_width(), 1600.0);
//! assert_eq!(config.min_distance(), 120.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;
use thiserror::Error;

use netlayout_core::geometry::{Bounds, Size};

/// Error returned by [`LayoutConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid `{field}`: {reason}")]
pub struct ConfigError {
    field: &'static str,
    reason: String,
}

impl ConfigError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn into_layout(self) -> LayoutConfig {
        self.layout
    }
}

/// Canvas geometry and algorithm parameters.
///
/// Defaults reproduce the classic three-band topology view on a 1200×800
/// canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    canvas_width: f32,
    canvas_height: f32,
    horizontal_spacing: f32,
    /// Accepted for compatibility with stored settings; band rows are placed
    /// by their vertical fraction.
    vertical_spacing: f32,
    margin: f32,
    min_distance: f32,

    // Force simulation
    iterations: usize,
    cooling_factor: f32,
    initial_temperature: f32,
    min_temperature: f32,
    attraction_strength: f32,
    repulsion_strength: f32,

    // Initial placement
    jitter_x: f32,
    jitter_y: f32,
    network_row_offset: f32,
    network_spacing_ratio: f32,

    // Overlap resolution
    overlap_passes: usize,

    seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            horizontal_spacing: 180.0,
            vertical_spacing: 150.0,
            margin: 80.0,
            min_distance: 120.0,
            iterations: 100,
            cooling_factor: 0.95,
            initial_temperature: 100.0,
            min_temperature: 0.1,
            attraction_strength: 0.5,
            repulsion_strength: 800.0,
            jitter_x: 20.0,
            jitter_y: 10.0,
            network_row_offset: 50.0,
            network_spacing_ratio: 0.8,
            overlap_passes: 1,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Set the canvas dimensions
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the horizontal distance between neighbours in a band
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the margin kept free on every side of the canvas
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the distance below which two entities count as overlapping
    pub fn with_min_distance(mut self, distance: f32) -> Self {
        self.min_distance = distance;
        self
    }

    /// Set the number of iterations for the force simulation
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f32) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_initial_temperature(mut self, temperature: f32) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Set the temperature below which the simulation stops early
    pub fn with_min_temperature(mut self, temperature: f32) -> Self {
        self.min_temperature = temperature;
        self
    }

    pub fn with_attraction_strength(mut self, strength: f32) -> Self {
        self.attraction_strength = strength;
        self
    }

    pub fn with_repulsion_strength(mut self, strength: f32) -> Self {
        self.repulsion_strength = strength;
        self
    }

    /// Set the jitter amplitudes; zero disables jitter on that axis
    pub fn with_jitter(mut self, x: f32, y: f32) -> Self {
        self.jitter_x = x;
        self.jitter_y = y;
        self
    }

    pub fn with_network_row_offset(mut self, offset: f32) -> Self {
        self.network_row_offset = offset;
        self
    }

    pub fn with_network_spacing_ratio(mut self, ratio: f32) -> Self {
        self.network_spacing_ratio = ratio;
        self
    }

    /// Set the maximum number of detect/resolve passes for overlaps
    pub fn with_overlap_passes(mut self, passes: usize) -> Self {
        self.overlap_passes = passes;
        self
    }

    /// Seed the random source used for jitter and tie-breaking
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// The area every final position is clamped into.
    pub fn interior(&self) -> Bounds {
        Bounds::from_size(self.canvas_size()).shrink(self.margin)
    }

    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn cooling_factor(&self) -> f32 {
        self.cooling_factor
    }

    pub fn initial_temperature(&self) -> f32 {
        self.initial_temperature
    }

    pub fn min_temperature(&self) -> f32 {
        self.min_temperature
    }

    pub fn attraction_strength(&self) -> f32 {
        self.attraction_strength
    }

    pub fn repulsion_strength(&self) -> f32 {
        self.repulsion_strength
    }

    pub fn jitter_x(&self) -> f32 {
        self.jitter_x
    }

    pub fn jitter_y(&self) -> f32 {
        self.jitter_y
    }

    pub fn network_row_offset(&self) -> f32 {
        self.network_row_offset
    }

    pub fn network_spacing_ratio(&self) -> f32 {
        self.network_spacing_ratio
    }

    pub fn overlap_passes(&self) -> usize {
        self.overlap_passes
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks that the parameters describe a usable layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("margin", self.margin),
            ("min_distance", self.min_distance),
            ("cooling_factor", self.cooling_factor),
            ("initial_temperature", self.initial_temperature),
            ("min_temperature", self.min_temperature),
            ("attraction_strength", self.attraction_strength),
            ("repulsion_strength", self.repulsion_strength),
            ("jitter_x", self.jitter_x),
            ("jitter_y", self.jitter_y),
            ("network_row_offset", self.network_row_offset),
            ("network_spacing_ratio", self.network_spacing_ratio),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::new(field, "must be a finite number"));
            }
        }

        let non_negative = [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("margin", self.margin),
            ("min_distance", self.min_distance),
            ("initial_temperature", self.initial_temperature),
            ("min_temperature", self.min_temperature),
            ("attraction_strength", self.attraction_strength),
            ("repulsion_strength", self.repulsion_strength),
            ("jitter_x", self.jitter_x),
            ("jitter_y", self.jitter_y),
            ("network_spacing_ratio", self.network_spacing_ratio),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::new(field, "must not be negative"));
            }
        }

        if self.canvas_size().is_empty() {
            return Err(ConfigError::new("canvas_width", "canvas must have a positive size"));
        }
        if self.canvas_width <= 2.0 * self.margin {
            return Err(ConfigError::new("margin", "must be less than half the canvas width"));
        }
        if self.canvas_height <= 2.0 * self.margin {
            return Err(ConfigError::new("margin", "must be less than half the canvas height"));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor <= 1.0) {
            return Err(ConfigError::new("cooling_factor", "must be in (0, 1]"));
        }
        if self.overlap_passes == 0 {
            return Err(ConfigError::new("overlap_passes", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_width(), 1200.0);
        assert_eq!(config.canvas_height(), 800.0);
        assert_eq!(config.horizontal_spacing(), 180.0);
        assert_eq!(config.vertical_spacing(), 150.0);
        assert_eq!(config.margin(), 80.0);
        assert_eq!(config.min_distance(), 120.0);
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.cooling_factor(), 0.95);
        assert_eq!(config.initial_temperature(), 100.0);
        assert_eq!(config.attraction_strength(), 0.5);
        assert_eq!(config.repulsion_strength(), 800.0);
        assert_eq!(config.overlap_passes(), 1);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interior() {
        let interior = LayoutConfig::default().interior();
        assert_eq!(interior.min_x(), 80.0);
        assert_eq!(interior.max_x(), 1120.0);
        assert_eq!(interior.min_y(), 80.0);
        assert_eq!(interior.max_y(), 720.0);
    }

    #[test]
    fn test_validate_rejects_oversized_margin() {
        let err = LayoutConfig::default()
            .with_canvas_size(150.0, 800.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "margin");
    }

    #[test]
    fn test_validate_rejects_bad_cooling() {
        let err = LayoutConfig::default()
            .with_cooling_factor(1.5)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "cooling_factor");
        assert_eq!(err.to_string(), "invalid `cooling_factor`: must be in (0, 1]");
    }

    #[test]
    fn test_validate_rejects_negative_jitter() {
        let err = LayoutConfig::default()
            .with_jitter(-1.0, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "jitter_x");
    }

    #[test]
    fn test_validate_rejects_nan() {
        let err = LayoutConfig::default()
            .with_repulsion_strength(f32::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "repulsion_strength");
    }

    #[test]
    fn test_validate_rejects_zero_overlap_passes() {
        let err = LayoutConfig::default()
            .with_overlap_passes(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "overlap_passes");
    }

    #[test]
    fn test_zero_spacing_is_valid() {
        let config = LayoutConfig::default()
            .with_horizontal_spacing(0.0)
            .with_jitter(0.0, 0.0);
        assert!(config.validate().is_ok());
    }
}
