//! Minimum-distance enforcement.
//!
//! Pairs closer than `min_distance` are detected against a snapshot of the
//! positions, then resolved one after another against the live positions: each
//! entity of a pair is pushed half of the missing distance along the line
//! joining them. Resolving one pair can disturb another, so a single pass does
//! not guarantee a violation-free result; more passes can be configured.
//!
//! A pair that an earlier move in the same pass already pushed past
//! `min_distance` is left where it is. It is never pulled back to exactly
//! `min_distance`.

use log::{debug, trace};
use rand::Rng;

use netlayout_core::geometry::Point;

use crate::{config::LayoutConfig, engine::clamp::clamp, state::LayoutState};

/// Below this separation two entities are considered coincident and are
/// pushed apart along a random direction.
const COINCIDENT_DISTANCE: f32 = 1.0;

/// Half-extent of the square the random separation direction is drawn from.
const RANDOM_DIRECTION_EXTENT: f32 = 50.0;

/// Two entities closer than the minimum distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    first: usize,
    second: usize,
    distance: f32,
}

impl Overlap {
    /// Index of the entity that comes first in state order.
    pub fn first(&self) -> usize {
        self.first
    }

    pub fn second(&self) -> usize {
        self.second
    }

    /// Separation at the time of detection.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

/// Lists every unordered pair of entities closer than `min_distance`.
///
/// Pairs are reported in state order with `first < second`; an entity is
/// never paired with itself.
pub fn detect_overlaps(state: &LayoutState, min_distance: f32) -> Vec<Overlap> {
    let points = state.points();
    let mut overlaps = Vec::new();

    for first in 0..points.len() {
        for second in (first + 1)..points.len() {
            let distance = points[first].distance(points[second]);
            if distance < min_distance {
                overlaps.push(Overlap {
                    first,
                    second,
                    distance,
                });
            }
        }
    }

    overlaps
}

/// Pushes overlapping entities apart and clamps the result into the canvas.
///
/// Runs up to `overlap_passes` passes of detection and resolution, stopping
/// early once a pass finds nothing. The returned state is always clamped,
/// even when no overlap was found.
pub fn resolve_overlaps<R: Rng>(
    state: LayoutState,
    config: &LayoutConfig,
    rng: &mut R,
) -> LayoutState {
    let min_distance = config.min_distance();
    let mut state = state;

    for pass in 0..config.overlap_passes() {
        let overlaps = detect_overlaps(&state, min_distance);
        if overlaps.is_empty() {
            break;
        }
        debug!(pass = pass, overlaps = overlaps.len(); "Resolving overlaps");

        for overlap in &overlaps {
            separate(&mut state, overlap, min_distance, rng);
        }
        state = clamp(state, config);
    }

    clamp(state, config)
}

/// Moves both entities of a pair apart, symmetrically, using their current
/// positions.
fn separate<R: Rng>(state: &mut LayoutState, overlap: &Overlap, min_distance: f32, rng: &mut R) {
    let a = state.point_at(overlap.first);
    let b = state.point_at(overlap.second);
    let delta = b.sub_point(a);
    let distance = delta.hypot();

    let direction = if distance < COINCIDENT_DISTANCE {
        random_direction(rng)
    } else {
        delta.normalize().unwrap_or(Point::new(1.0, 0.0))
    };

    // An earlier pair in the same pass may already have moved these apart.
    let push = (min_distance - distance) / 2.0;
    if push <= 0.0 {
        trace!(first = overlap.first, second = overlap.second; "Pair already separated");
        return;
    }

    let offset = direction.scale(push);
    state.set_point_at(overlap.first, a.sub_point(offset));
    state.set_point_at(overlap.second, b.add_point(offset));
}

fn random_direction<R: Rng>(rng: &mut R) -> Point {
    let candidate = Point::new(
        rng.random_range(-RANDOM_DIRECTION_EXTENT..=RANDOM_DIRECTION_EXTENT),
        rng.random_range(-RANDOM_DIRECTION_EXTENT..=RANDOM_DIRECTION_EXTENT),
    );
    candidate.normalize().unwrap_or(Point::new(1.0, 0.0))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_detection_is_symmetric(coords: Vec<(f32, f32)>) -> Result<(), TestCaseError> {
        let state: LayoutState = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| (format!("e{i}"), Point::new(*x, *y)))
            .collect();
        let points = state.points();

        let overlaps = detect_overlaps(&state, 120.0);

        for overlap in &overlaps {
            prop_assert!(overlap.first() < overlap.second());
            prop_assert!(overlap.distance() < 120.0);
        }
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let close = points[i].distance(points[j]) < 120.0;
                let reported = overlaps.iter().any(|o| o.first() == i && o.second() == j);
                prop_assert_eq!(close, reported);
            }
        }
        Ok(())
    }

    fn check_resolution_stays_inside(
        coords: Vec<(f32, f32)>,
        seed: u64,
    ) -> Result<(), TestCaseError> {
        use rand::{SeedableRng, rngs::StdRng};

        let config = LayoutConfig::default();
        let state: LayoutState = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| (format!("e{i}"), Point::new(*x, *y)))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let resolved = resolve_overlaps(state.clone(), &config, &mut rng);

        prop_assert_eq!(resolved.len(), state.len());
        prop_assert!(resolved.is_within(config.interior()));
        Ok(())
    }

    proptest! {
        #[test]
        fn detection_is_symmetric(
            coords in prop::collection::vec((0.0f32..1200.0, 0.0f32..800.0), 0..16)
        ) {
            check_detection_is_symmetric(coords)?;
        }

        #[test]
        fn resolution_stays_inside(
            coords in prop::collection::vec((0.0f32..1200.0, 0.0f32..800.0), 0..16),
            seed in any::<u64>()
        ) {
            check_resolution_stays_inside(coords, seed)?;
        }
    }
}
