//! Force-directed refinement
//!
//! Every pair of entities repels with a force of `repulsion / d²`, and every
//! connection pulls its endpoints together with a spring force of
//! `d × attraction`. Forces are summed per entity and applied to all entities
//! at once; the step length is capped by a temperature that cools
//! geometrically, so the simulation always settles within the configured
//! number of iterations.

use log::{debug, trace};

use netlayout_core::{geometry::Point, topology::Connection};

use crate::{config::LayoutConfig, error::LayoutError, state::LayoutState};

/// Distances are floored at this value before computing repulsion, and
/// connected entities closer than this exert no attraction.
pub const MIN_FORCE_DISTANCE: f32 = 1.0;

/// Refines positions with a force-directed simulation.
///
/// The returned state has exactly the same ids as the input.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownEndpoint`] if a connection references an id
/// that has no position. Nothing is simulated in that case.
pub fn refine<'a>(
    state: LayoutState,
    connections: impl IntoIterator<Item = &'a Connection>,
    config: &LayoutConfig,
) -> Result<LayoutState, LayoutError> {
    let edges = resolve_edges(&state, connections)?;
    let mut state = state;
    let mut points = state.points();

    let mut temperature = config.initial_temperature();
    let mut iterations_run = 0;

    for iteration in 0..config.iterations() {
        let forces = net_forces(&points, &edges, config);

        for (point, force) in points.iter_mut().zip(&forces) {
            // A zero or non-finite net force leaves the entity in place.
            if let Some(direction) = force.normalize() {
                let step = force.hypot().min(temperature);
                *point = point.add_point(direction.scale(step));
            }
        }

        iterations_run = iteration + 1;
        temperature *= config.cooling_factor();
        trace!(iteration = iteration, temperature = temperature; "Force iteration complete");

        if temperature < config.min_temperature() {
            break;
        }
    }

    debug!(
        entities = points.len(),
        edges = edges.len(),
        iterations = iterations_run,
        final_temperature = temperature;
        "Force refinement finished"
    );

    state.set_points(&points);
    Ok(state)
}

/// Maps every connection to the pair of state indices it joins.
fn resolve_edges<'a>(
    state: &LayoutState,
    connections: impl IntoIterator<Item = &'a Connection>,
) -> Result<Vec<(usize, usize)>, LayoutError> {
    connections
        .into_iter()
        .map(|conn| {
            let source = state
                .index_of(conn.source_id())
                .ok_or_else(|| LayoutError::UnknownEndpoint(conn.source_id().to_string()))?;
            let target = state
                .index_of(conn.target_id())
                .ok_or_else(|| LayoutError::UnknownEndpoint(conn.target_id().to_string()))?;
            Ok((source, target))
        })
        .collect()
}

/// Net force on every entity for the current positions.
fn net_forces(points: &[Point], edges: &[(usize, usize)], config: &LayoutConfig) -> Vec<Point> {
    let mut forces = vec![Point::default(); points.len()];

    // Repulsion between every unordered pair
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let force = repulsion(points[i], points[j], config.repulsion_strength());
            forces[i] = forces[i].add_point(force);
            forces[j] = forces[j].sub_point(force);
        }
    }

    // Attraction along connections
    for &(source, target) in edges {
        let force = attraction(points[source], points[target], config.attraction_strength());
        forces[source] = forces[source].add_point(force);
        forces[target] = forces[target].sub_point(force);
    }

    forces
}

/// Repulsive force acting on the entity at `a`, pointing away from `b`.
pub fn repulsion(a: Point, b: Point, strength: f32) -> Point {
    let delta = a.sub_point(b);
    let distance = delta.hypot().max(MIN_FORCE_DISTANCE);
    let magnitude = strength / (distance * distance);
    delta.scale(magnitude / distance)
}

/// Attractive force acting on the entity at `a`, pointing toward `b`.
pub fn attraction(a: Point, b: Point, strength: f32) -> Point {
    let delta = b.sub_point(a);
    let distance = delta.hypot();
    if distance < MIN_FORCE_DISTANCE {
        return Point::default();
    }
    let magnitude = distance * strength;
    delta.scale(magnitude / distance)
}
