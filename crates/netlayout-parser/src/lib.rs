//! Netlayout Parser
//!
//! Turns a raw JSON topology into typed, validated records for the layout
//! engine. Validation is per record: malformed devices, networks and
//! connections are dropped and described by [`error::Diagnostic`]s instead of
//! failing the whole input.
//!
//! # Example
//!
//! ```
//! # use serde_json::json;
//! let raw = json!({
//!     "devices": [{"id": "r1", "name": "Edge", "category": "router"}],
//!     "networks": [{"id": "n1", "name": "LAN"}],
//!     "connections": [{
//!         "source_id": "r1", "target_id": "n1",
//!         "source_kind": "device", "target_kind": "network",
//!     }],
//! });
//!
//! let parsed = netlayout_parser::parse_topology(&raw).unwrap();
//! assert_eq!(parsed.entity_count(), 2);
//! assert_eq!(parsed.connections().count(), 1);
//! assert!(parsed.diagnostics().is_empty());
//! ```

pub mod error;

mod record;
mod topology;

pub use record::{Collection, RecordOutcome, RecordRef, Retained};
pub use topology::{ParsedTopology, parse_connection, parse_device, parse_network, parse_topology};
