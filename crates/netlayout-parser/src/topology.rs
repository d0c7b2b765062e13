//! Validation of raw JSON topologies.
//!
//! Each record is checked on its own and produces a [`RecordOutcome`]. A
//! second pass over the accepted records rejects duplicate ids and
//! connections whose endpoints are not retained entities, so the layout
//! engine only ever sees a self-consistent topology.

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{Map, Value};

use netlayout_core::topology::{Connection, Device, DeviceCategory, EntityKind, Network};

use crate::{
    error::{Diagnostic, ErrorCode, TopologyError},
    record::{Collection, RecordOutcome, RecordRef, Retained},
};

/// Field names accepted for a device category, canonical name first.
const CATEGORY_FIELDS: &[&str] = &["category", "type"];
const SOURCE_KIND_FIELDS: &[&str] = &["source_kind", "source_type"];
const TARGET_KIND_FIELDS: &[&str] = &["target_kind", "target_type"];

/// The validated content of a raw topology.
#[derive(Debug, Clone, Default)]
pub struct ParsedTopology {
    devices: Vec<Retained<Device>>,
    networks: Vec<Retained<Network>>,
    connections: Vec<Retained<Connection>>,
    diagnostics: Vec<Diagnostic>,
}

impl ParsedTopology {
    /// Retained devices in input order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().map(Retained::record)
    }

    /// Retained networks in input order.
    pub fn networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter().map(Retained::record)
    }

    /// Retained connections in input order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().map(Retained::record)
    }

    /// Retained devices together with their index in the raw `devices` array.
    pub fn retained_devices(&self) -> &[Retained<Device>] {
        &self.devices
    }

    /// Retained networks together with their index in the raw `networks` array.
    pub fn retained_networks(&self) -> &[Retained<Network>] {
        &self.networks
    }

    pub fn retained_connections(&self) -> &[Retained<Connection>] {
        &self.connections
    }

    /// Diagnostics for every dropped record, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of devices and networks that take part in the layout.
    pub fn entity_count(&self) -> usize {
        self.devices.len() + self.networks.len()
    }
}

/// Validates a raw topology.
///
/// A missing or `null` collection is treated as empty.
///
/// # Errors
///
/// Returns [`TopologyError`] if the root is not an object or a collection
/// is present but not an array. Malformed records never cause an error;
/// they are reported through [`ParsedTopology::diagnostics`].
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use netlayout_parser::parse_topology;
/// let raw = json!({
///     "devices": [
///         {"id": "r1", "name": "edge", "category": "router"},
///         {"id": "x1", "name": "unknown", "category": "toaster"},
///     ],
/// });
///
/// let parsed = parse_topology(&raw).unwrap();
/// assert_eq!(parsed.devices().count(), 1);
/// assert_eq!(parsed.diagnostics().len(), 1);
/// ```
pub fn parse_topology(raw: &Value) -> Result<ParsedTopology, TopologyError> {
    let root = raw.as_object().ok_or(TopologyError::NotAnObject)?;

    let raw_devices = collection(root, Collection::Devices)?;
    let raw_networks = collection(root, Collection::Networks)?;
    let raw_connections = collection(root, Collection::Connections)?;

    debug!(
        devices = raw_devices.len(),
        networks = raw_networks.len(),
        connections = raw_connections.len();
        "Validating topology records"
    );

    let mut parsed = ParsedTopology::default();
    let mut registry: IndexMap<String, EntityKind> = IndexMap::new();

    for (index, raw) in raw_devices.iter().enumerate() {
        let outcome = parse_device(index, raw).into_result().and_then(|device| {
            let record = RecordRef::new(Collection::Devices, index);
            register(&mut registry, record, device.id(), EntityKind::Device)?;
            Ok(device)
        });
        match outcome {
            Ok(device) => parsed.devices.push(Retained::new(index, device)),
            Err(diag) => parsed.skip(diag),
        }
    }

    for (index, raw) in raw_networks.iter().enumerate() {
        let outcome = parse_network(index, raw).into_result().and_then(|network| {
            let record = RecordRef::new(Collection::Networks, index);
            register(&mut registry, record, network.id(), EntityKind::Network)?;
            Ok(network)
        });
        match outcome {
            Ok(network) => parsed.networks.push(Retained::new(index, network)),
            Err(diag) => parsed.skip(diag),
        }
    }

    for (index, raw) in raw_connections.iter().enumerate() {
        let record = RecordRef::new(Collection::Connections, index);
        let outcome = parse_connection(index, raw).into_result().and_then(|conn| {
            check_endpoint(&registry, record, conn.source_id(), conn.source_kind())?;
            check_endpoint(&registry, record, conn.target_id(), conn.target_kind())?;
            Ok(conn)
        });
        match outcome {
            Ok(conn) => parsed.connections.push(Retained::new(index, conn)),
            Err(diag) => parsed.skip(diag),
        }
    }

    debug!(
        devices = parsed.devices.len(),
        networks = parsed.networks.len(),
        connections = parsed.connections.len(),
        dropped = parsed.diagnostics.len();
        "Topology validated"
    );

    Ok(parsed)
}

impl ParsedTopology {
    fn skip(&mut self, diag: Diagnostic) {
        warn!(code:? = diag.code(); "Dropping record: {diag}");
        self.diagnostics.push(diag);
    }
}

/// Validates a single device record.
///
/// The category is read from `category`, falling back to `type`.
pub fn parse_device(index: usize, raw: &Value) -> RecordOutcome<Device> {
    let record = RecordRef::new(Collection::Devices, index);
    let result = as_object(record, raw).and_then(|obj| {
        let id = required_str(record, obj, &["id"])?;
        let name = required_str(record, obj, &["name"])?;
        let category = required_str(record, obj, CATEGORY_FIELDS)?;
        let category = category.parse::<DeviceCategory>().map_err(|err| {
            Diagnostic::warning(err.to_string())
                .with_code(ErrorCode::E200)
                .with_record(record)
                .with_entity_id(id)
                .with_help(
                    "expected one of: router, switch_core, switch_access, firewall, vm, host, \
                     load_balancer",
                )
        })?;
        Ok(Device::new(id, name, category))
    });
    result.into()
}

/// Validates a single network record.
pub fn parse_network(index: usize, raw: &Value) -> RecordOutcome<Network> {
    let record = RecordRef::new(Collection::Networks, index);
    let result = as_object(record, raw).and_then(|obj| {
        let id = required_str(record, obj, &["id"])?;
        let name = required_str(record, obj, &["name"])?;
        Ok(Network::new(id, name))
    });
    result.into()
}

/// Validates a single connection record.
///
/// Endpoint kinds are read from `source_kind`/`target_kind`, falling back to
/// `source_type`/`target_type`. Whether the endpoints exist is checked by
/// [`parse_topology`], not here.
pub fn parse_connection(index: usize, raw: &Value) -> RecordOutcome<Connection> {
    let record = RecordRef::new(Collection::Connections, index);
    let result = as_object(record, raw).and_then(|obj| {
        let source_id = required_str(record, obj, &["source_id"])?;
        let target_id = required_str(record, obj, &["target_id"])?;
        let source_kind = entity_kind(record, required_str(record, obj, SOURCE_KIND_FIELDS)?)?;
        let target_kind = entity_kind(record, required_str(record, obj, TARGET_KIND_FIELDS)?)?;
        Ok(Connection::new(source_id, source_kind, target_id, target_kind))
    });
    result.into()
}

fn collection(
    root: &Map<String, Value>,
    collection: Collection,
) -> Result<&[Value], TopologyError> {
    match root.get(collection.key()) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(records)) => Ok(records.as_slice()),
        Some(_) => Err(TopologyError::NotAnArray(collection)),
    }
}

fn as_object(record: RecordRef, raw: &Value) -> Result<&Map<String, Value>, Diagnostic> {
    raw.as_object().ok_or_else(|| {
        Diagnostic::warning("record is not an object")
            .with_code(ErrorCode::E100)
            .with_record(record)
    })
}

/// Reads the first present field out of `names` as a string.
fn required_str<'a>(
    record: RecordRef,
    obj: &'a Map<String, Value>,
    names: &[&str],
) -> Result<&'a str, Diagnostic> {
    let canonical = names[0];
    let Some(value) = names.iter().find_map(|name| obj.get(*name)) else {
        return Err(with_id(
            Diagnostic::warning(format!("missing required field `{canonical}`"))
                .with_code(ErrorCode::E101)
                .with_record(record),
            obj,
        ));
    };
    value.as_str().ok_or_else(|| {
        with_id(
            Diagnostic::warning(format!("field `{canonical}` must be a string"))
                .with_code(ErrorCode::E102)
                .with_record(record),
            obj,
        )
    })
}

fn with_id(diag: Diagnostic, obj: &Map<String, Value>) -> Diagnostic {
    match obj.get("id").and_then(Value::as_str) {
        Some(id) => diag.with_entity_id(id),
        None => diag,
    }
}

fn entity_kind(record: RecordRef, value: &str) -> Result<EntityKind, Diagnostic> {
    value.parse::<EntityKind>().map_err(|err| {
        Diagnostic::warning(err.to_string())
            .with_code(ErrorCode::E201)
            .with_record(record)
            .with_help("expected `device` or `network`")
    })
}

fn register(
    registry: &mut IndexMap<String, EntityKind>,
    record: RecordRef,
    id: &str,
    kind: EntityKind,
) -> Result<(), Diagnostic> {
    if let Some(existing) = registry.get(id) {
        return Err(Diagnostic::warning(format!(
            "id `{id}` is already used by a {existing}"
        ))
        .with_code(ErrorCode::E300)
        .with_record(record)
        .with_entity_id(id));
    }
    registry.insert(id.to_string(), kind);
    Ok(())
}

fn check_endpoint(
    registry: &IndexMap<String, EntityKind>,
    record: RecordRef,
    id: &str,
    kind: EntityKind,
) -> Result<(), Diagnostic> {
    match registry.get(id) {
        Some(found) if *found == kind => Ok(()),
        Some(found) => Err(Diagnostic::warning(format!(
            "endpoint `{id}` is declared as a {kind} but is a {found}"
        ))
        .with_code(ErrorCode::E302)
        .with_record(record)),
        None => Err(Diagnostic::warning(format!(
            "endpoint `{id}` does not match any retained {kind}"
        ))
        .with_code(ErrorCode::E301)
        .with_record(record)),
    }
}
