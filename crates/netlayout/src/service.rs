//! Topology-in, topology-out layout service.

use log::{debug, info, warn};
use rand::{Rng, rngs::StdRng};
use serde_json::{Map, Value, json};

use netlayout_parser::{Collection, ParsedTopology, error::Diagnostic, parse_topology};

use crate::{
    config::LayoutConfig,
    engine::Engine,
    error::NetLayoutError,
    payload::{GridPosition, LayoutPayload},
    state::LayoutState,
};

/// Key of the position object written onto each laid-out record.
pub const LOCATION_KEY: &str = "location";

/// Everything produced by one call to [`LayoutService::generate_layout`].
#[derive(Debug, Clone)]
pub struct LayoutReport {
    topology: Value,
    parsed: ParsedTopology,
    state: LayoutState,
}

impl LayoutReport {
    /// The caller's topology with a `location` on every retained device and
    /// network.
    pub fn topology(&self) -> &Value {
        &self.topology
    }

    pub fn into_topology(self) -> Value {
        self.topology
    }

    /// The unrounded final positions, keyed by entity id.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Why records were dropped, in input order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.parsed.diagnostics()
    }

    /// The validated records the layout was computed from.
    pub fn parsed(&self) -> &ParsedTopology {
        &self.parsed
    }

    /// Rounded positions in the shape a layout store accepts.
    pub fn payload(&self) -> LayoutPayload {
        LayoutPayload::from_state(&self.parsed, &self.state)
    }
}

/// Lays out raw JSON topologies.
///
/// Each call is independent; the service only carries its configuration and
/// random source between calls.
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use netlayout::{LayoutService, config::LayoutConfig};
/// let mut service = LayoutService::seeded(LayoutConfig::default(), 7);
///
/// let report = service
///     .generate_layout(json!({
///         "devices": [{"id": "r1", "name": "Edge", "category": "router"}],
///         "networks": [],
///         "connections": [],
///     }))
///     .unwrap();
///
/// let location = &report.topology()["devices"][0]["location"];
/// assert!(location["x"].is_i64());
/// assert!(location["y"].is_i64());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutService<R = StdRng> {
    engine: Engine<R>,
}

impl LayoutService<StdRng> {
    /// Creates a service seeded from the configuration, if it carries a seed.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            engine: Engine::new(config),
        }
    }

    /// Creates a service whose layouts are reproducible for a given seed.
    pub fn seeded(config: LayoutConfig, seed: u64) -> Self {
        Self {
            engine: Engine::seeded(config, seed),
        }
    }
}

impl Default for LayoutService<StdRng> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<R: Rng> LayoutService<R> {
    pub fn with_engine(engine: Engine<R>) -> Self {
        Self { engine }
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    /// Computes a layout and writes it back into the topology.
    ///
    /// Malformed records are dropped from the layout and left untouched in
    /// the returned topology; the report lists them as diagnostics.
    /// Connections and any other content pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NetLayoutError::Topology`] if the input is not an object or
    /// a collection is not an array, and [`NetLayoutError::Layout`] if the
    /// configuration is invalid.
    pub fn generate_layout(&mut self, topology: Value) -> Result<LayoutReport, NetLayoutError> {
        info!("Parsing topology");
        let parsed = parse_topology(&topology)?;
        if !parsed.diagnostics().is_empty() {
            warn!(dropped = parsed.diagnostics().len(); "Some records were dropped");
        }
        debug!(
            devices = parsed.retained_devices().len(),
            networks = parsed.retained_networks().len(),
            connections = parsed.retained_connections().len();
            "Topology parsed"
        );

        let state = self.engine.calculate_topology(&parsed)?;

        let mut topology = topology;
        merge_locations(&mut topology, &parsed, &state);
        info!(entities = state.len(); "Layout generated");

        Ok(LayoutReport {
            topology,
            parsed,
            state,
        })
    }
}

/// Writes rounded positions onto the retained records of `topology`.
fn merge_locations(topology: &mut Value, parsed: &ParsedTopology, state: &LayoutState) {
    let devices = parsed
        .retained_devices()
        .iter()
        .map(|retained| (retained.index(), retained.record().id()));
    write_locations(topology, Collection::Devices, devices, state);

    let networks = parsed
        .retained_networks()
        .iter()
        .map(|retained| (retained.index(), retained.record().id()));
    write_locations(topology, Collection::Networks, networks, state);
}

fn write_locations<'a>(
    topology: &mut Value,
    collection: Collection,
    records: impl Iterator<Item = (usize, &'a str)>,
    state: &LayoutState,
) {
    let Some(array) = topology
        .get_mut(collection.key())
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for (index, id) in records {
        let (Some(point), Some(Value::Object(record))) = (state.get(id), array.get_mut(index))
        else {
            continue;
        };
        set_location(record, point.into());
    }
}

/// Sets `x`/`y` on the record's location object, creating it if needed and
/// keeping any other keys it already has.
fn set_location(record: &mut Map<String, Value>, position: GridPosition) {
    let location = record
        .entry(LOCATION_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if !location.is_object() {
        *location = Value::Object(Map::new());
    }
    if let Value::Object(location) = location {
        location.insert("x".to_string(), json!(position.x));
        location.insert("y".to_string(), json!(position.y));
    }
}
