//! Boundary clamping.

use log::debug;

use crate::{config::LayoutConfig, state::LayoutState};

/// Clamps every position into the canvas shrunk by the margin.
///
/// Applying the clamp twice gives the same result as applying it once.
pub fn clamp(state: LayoutState, config: &LayoutConfig) -> LayoutState {
    let interior = config.interior();
    let mut state = state;
    let mut points = state.points();
    let mut moved = 0usize;

    for point in &mut points {
        let clamped = interior.clamp_point(*point);
        if clamped != *point {
            moved += 1;
            *point = clamped;
        }
    }

    if moved > 0 {
        debug!(moved = moved; "Clamped positions into the canvas interior");
    }

    state.set_points(&points);
    state
}

#[cfg(test)]
mod tests {
    use netlayout_core::geometry::Point;

    use super::*;

    #[test]
    fn test_clamp_pulls_outliers_to_edges() {
        let mut state = LayoutState::new();
        state.insert("left", Point::new(-50.0, 400.0));
        state.insert("corner", Point::new(5000.0, 5000.0));
        state.insert("inside", Point::new(600.0, 300.0));

        let state = clamp(state, &LayoutConfig::default());

        assert_eq!(state.get("left"), Some(Point::new(80.0, 400.0)));
        assert_eq!(state.get("corner"), Some(Point::new(1120.0, 720.0)));
        assert_eq!(state.get("inside"), Some(Point::new(600.0, 300.0)));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let mut state = LayoutState::new();
        state.insert("a", Point::new(-1.0, 9999.0));
        state.insert("b", Point::new(700.0, 10.0));
        let config = LayoutConfig::default();

        let once = clamp(state, &config);
        let twice = clamp(once.clone(), &config);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_respects_custom_margin() {
        let mut state = LayoutState::new();
        state.insert("a", Point::new(0.0, 0.0));
        let config = LayoutConfig::default()
            .with_canvas_size(400.0, 300.0)
            .with_margin(20.0);

        let state = clamp(state, &config);

        assert_eq!(state.get("a"), Some(Point::new(20.0, 20.0)));
        assert!(state.is_within(config.interior()));
    }
}
