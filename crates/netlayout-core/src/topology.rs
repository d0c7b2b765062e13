//! Typed topology records.
//!
//! These are the validated shapes the layout engine works on. Raw records
//! coming from a caller are turned into these types by `netlayout-parser`;
//! anything that fails validation never reaches the engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// Returns the rejected input string.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The closed set of device categories.
///
/// The category decides which horizontal band a device is placed in; see
/// [`crate::layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    Router,
    SwitchCore,
    SwitchAccess,
    Firewall,
    Vm,
    Host,
    #[serde(alias = "lb")]
    LoadBalancer,
}

impl DeviceCategory {
    /// All categories, in declaration order.
    pub const ALL: [DeviceCategory; 7] = [
        DeviceCategory::Router,
        DeviceCategory::SwitchCore,
        DeviceCategory::SwitchAccess,
        DeviceCategory::Firewall,
        DeviceCategory::Vm,
        DeviceCategory::Host,
        DeviceCategory::LoadBalancer,
    ];

    /// Returns the canonical wire spelling of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceCategory::Router => "router",
            DeviceCategory::SwitchCore => "switch_core",
            DeviceCategory::SwitchAccess => "switch_access",
            DeviceCategory::Firewall => "firewall",
            DeviceCategory::Vm => "vm",
            DeviceCategory::Host => "host",
            DeviceCategory::LoadBalancer => "load_balancer",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "router" => Ok(DeviceCategory::Router),
            "switch_core" => Ok(DeviceCategory::SwitchCore),
            "switch_access" => Ok(DeviceCategory::SwitchAccess),
            "firewall" => Ok(DeviceCategory::Firewall),
            "vm" => Ok(DeviceCategory::Vm),
            "host" => Ok(DeviceCategory::Host),
            "load_balancer" | "lb" => Ok(DeviceCategory::LoadBalancer),
            _ => Err(UnknownVariant::new("device category", s)),
        }
    }
}

/// Kind of entity a connection endpoint refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Device,
    Network,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Device => "device",
            EntityKind::Network => "network",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(EntityKind::Device),
            "network" => Ok(EntityKind::Network),
            _ => Err(UnknownVariant::new("entity kind", s)),
        }
    }
}

/// A network device such as a router, switch or virtual machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: String,
    name: String,
    category: DeviceCategory,
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: DeviceCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> DeviceCategory {
        self.category
    }
}

/// A logical network segment (bridge, NAT network, VLAN, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    id: String,
    name: String,
}

impl Network {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An undirected link between two entities, referenced by id.
///
/// The source/target naming is kept from the input; the layout treats both
/// ends symmetrically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source_id: String,
    target_id: String,
    source_kind: EntityKind,
    target_kind: EntityKind,
}

impl Connection {
    pub fn new(
        source_id: impl Into<String>,
        source_kind: EntityKind,
        target_id: impl Into<String>,
        target_kind: EntityKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            source_kind,
            target_kind,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn source_kind(&self) -> EntityKind {
        self.source_kind
    }

    pub fn target_kind(&self) -> EntityKind {
        self.target_kind
    }
}
