//! Netlayout - Automatic layout for network topology diagrams
//!
//! This library assigns 2D coordinates to the devices and networks of a
//! virtualized network topology. Devices are banded by role (routers and
//! firewalls on top, switches and load balancers in the middle, hosts and
//! VMs at the bottom), refined with a force-directed simulation, kept inside
//! the canvas margin and spread to a minimum distance.
//!
//! # Example
//!
//! ```
//! use netlayout::{LayoutService, config::LayoutConfig};
//! use serde_json::json;
//!
//! let topology = json!({
//!     "devices": [
//!         {"id": "r1", "name": "Edge", "category": "router"},
//!         {"id": "vm1", "name": "Web", "category": "vm"},
//!     ],
//!     "networks": [{"id": "n1", "name": "LAN"}],
//!     "connections": [{
//!         "source_id": "r1", "source_kind": "device",
//!         "target_id": "n1", "target_kind": "network",
//!     }],
//! });
//!
//! let mut service = LayoutService::seeded(LayoutConfig::default(), 42);
//! let report = service.generate_layout(topology).unwrap();
//!
//! assert_eq!(report.state().len(), 3);
//! assert!(report.topology()["networks"][0]["location"].is_object());
//! ```

pub mod config;
pub mod engine;

mod error;
mod payload;
mod service;
mod state;

pub use netlayout_core::{geometry, layer, topology};
pub use netlayout_parser as parser;

pub use engine::Engine;
pub use error::{LayoutError, NetLayoutError};
pub use payload::{DevicePosition, GridPosition, LayoutPayload, NetworkPosition};
pub use service::{LOCATION_KEY, LayoutReport, LayoutService};
pub use state::LayoutState;
