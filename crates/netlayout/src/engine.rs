//! The layout pipeline.
//!
//! A layout is computed in four stages, each consuming the state produced by
//! the previous one:
//!
//! 1. [`placer::place`] - banded initial positions with jitter
//! 2. [`force::refine`] - force-directed refinement
//! 3. [`clamp::clamp`] - pull everything inside the canvas margin
//! 4. [`overlap::resolve_overlaps`] - enforce the minimum distance
//!
//! [`Engine`] owns the configuration and the random source and runs the
//! stages in order. The stages are public so they can be driven individually.

pub mod clamp;
pub mod force;
pub mod overlap;
pub mod placer;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use netlayout_core::topology::{Connection, Device, Network};
use netlayout_parser::ParsedTopology;

use crate::{config::LayoutConfig, error::LayoutError, state::LayoutState};

/// Runs the layout pipeline with a fixed configuration and random source.
///
/// The engine holds no state between calculations apart from the random
/// source, whose sequence advances with every call.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    config: LayoutConfig,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine seeded from the configuration.
    ///
    /// Without a configured seed the random source is seeded from the
    /// thread-local generator, so results differ from run to run.
    pub fn new(config: LayoutConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// Creates an engine with an explicit seed, ignoring any configured one.
    pub fn seeded(config: LayoutConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine drawing randomness from `rng`.
    pub fn with_rng(config: LayoutConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes positions for every device and network.
    ///
    /// Ids are expected to be unique across devices and networks, and every
    /// connection endpoint is expected to be one of them.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Config`] if the configuration is invalid, or
    /// [`LayoutError::UnknownEndpoint`] if a connection references an id that
    /// is not being laid out.
    pub fn calculate<'a>(
        &mut self,
        devices: impl IntoIterator<Item = &'a Device>,
        networks: impl IntoIterator<Item = &'a Network>,
        connections: impl IntoIterator<Item = &'a Connection>,
    ) -> Result<LayoutState, LayoutError> {
        self.config.validate()?;

        let state = placer::place(devices, networks, &self.config, &mut self.rng);
        info!(entities = state.len(); "Calculating layout");

        let state = force::refine(state, connections, &self.config)?;
        debug!("Force refinement complete");

        let state = clamp::clamp(state, &self.config);
        let state = overlap::resolve_overlaps(state, &self.config, &mut self.rng);
        debug!(entities = state.len(); "Layout calculated");

        Ok(state)
    }

    /// Computes positions for the records retained by the parser.
    ///
    /// # Errors
    ///
    /// See [`Engine::calculate`].
    pub fn calculate_topology(
        &mut self,
        topology: &ParsedTopology,
    ) -> Result<LayoutState, LayoutError> {
        self.calculate(
            topology.devices(),
            topology.networks(),
            topology.connections(),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use netlayout_core::topology::{DeviceCategory, EntityKind};

    use super::*;

    fn sample() -> (Vec<Device>, Vec<Network>, Vec<Connection>) {
        let devices = vec![
            Device::new("r1", "Edge Router", DeviceCategory::Router),
            Device::new("s1", "Core Switch", DeviceCategory::SwitchCore),
            Device::new("vm1", "Web", DeviceCategory::Vm),
            Device::new("vm2", "Db", DeviceCategory::Vm),
        ];
        let networks = vec![Network::new("n1", "LAN")];
        let connections = vec![
            Connection::new("r1", EntityKind::Device, "s1", EntityKind::Device),
            Connection::new("s1", EntityKind::Device, "n1", EntityKind::Network),
            Connection::new("vm1", EntityKind::Device, "n1", EntityKind::Network),
            Connection::new("vm2", EntityKind::Device, "n1", EntityKind::Network),
        ];
        (devices, networks, connections)
    }

    #[test]
    fn test_calculate_positions_every_entity_inside_canvas() {
        let (devices, networks, connections) = sample();
        let mut engine = Engine::seeded(LayoutConfig::default(), 7);

        let state = engine.calculate(&devices, &networks, &connections).unwrap();

        assert_eq!(state.len(), 5);
        assert!(state.is_within(engine.config().interior()));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let (devices, networks, connections) = sample();

        let first = Engine::seeded(LayoutConfig::default(), 42)
            .calculate(&devices, &networks, &connections)
            .unwrap();
        let second = Engine::seeded(LayoutConfig::default(), 42)
            .calculate(&devices, &networks, &connections)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_configured_seed_is_used() {
        let (devices, networks, connections) = sample();
        let config = LayoutConfig::default().with_seed(9);

        let first = Engine::new(config.clone())
            .calculate(&devices, &networks, &connections)
            .unwrap();
        let second = Engine::seeded(config, 9)
            .calculate(&devices, &networks, &connections)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_gives_empty_state() {
        let mut engine: Engine = Engine::default();
        let state = engine
            .calculate(
                &Vec::<Device>::new(),
                &Vec::<Network>::new(),
                &Vec::<Connection>::new(),
            )
            .unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_single_device_stays_in_place_without_jitter() {
        let devices = vec![Device::new("r1", "Router", DeviceCategory::Router)];
        let config = LayoutConfig::default().with_jitter(0.0, 0.0);
        let mut engine = Engine::seeded(config, 0);

        let state = engine
            .calculate(&devices, &Vec::<Network>::new(), &Vec::<Connection>::new())
            .unwrap();

        let point = state.get("r1").unwrap();
        assert!(approx_eq!(f32, point.x(), 600.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, point.y(), 120.0, epsilon = 1e-3));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let (devices, networks, connections) = sample();
        let config = LayoutConfig::default().with_cooling_factor(1.5);
        let mut engine = Engine::seeded(config, 0);

        let err = engine
            .calculate(&devices, &networks, &connections)
            .unwrap_err();

        assert!(matches!(err, LayoutError::Config(ref e) if e.field() == "cooling_factor"));
    }

    #[test]
    fn test_unknown_endpoint_is_rejected() {
        let (devices, networks, _) = sample();
        let connections = vec![Connection::new(
            "r1",
            EntityKind::Device,
            "ghost",
            EntityKind::Device,
        )];
        let mut engine = Engine::seeded(LayoutConfig::default(), 0);

        let err = engine
            .calculate(&devices, &networks, &connections)
            .unwrap_err();

        assert_eq!(err, LayoutError::UnknownEndpoint("ghost".to_string()));
    }

    #[test]
    fn test_custom_rng() {
        let (devices, networks, connections) = sample();
        let rng = StdRng::seed_from_u64(3);
        let mut engine = Engine::with_rng(LayoutConfig::default(), rng);

        let state = engine.calculate(&devices, &networks, &connections).unwrap();

        assert!(state.iter().all(|(_, p)| p.x().is_finite() && p.y().is_finite()));
    }
}
