//! Static category → band table.
//!
//! Devices are stacked in three fixed horizontal bands, top to bottom:
//!
//! | band          | vertical fraction | categories                                |
//! |---------------|-------------------|-------------------------------------------|
//! | `Network`     | 0.15              | router, firewall                          |
//! | `Switch`      | 0.45              | switch_core, switch_access, load_balancer |
//! | `Application` | 0.75              | vm, host                                  |
//!
//! The table is closed: every [`DeviceCategory`] belongs to exactly one band.

use std::fmt;

use crate::topology::DeviceCategory;

/// One of the three fixed horizontal bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    Network,
    Switch,
    Application,
}

impl Band {
    /// All bands, top to bottom.
    pub const ALL: [Band; 3] = [Band::Network, Band::Switch, Band::Application];

    /// Returns the descriptor for this band.
    pub fn descriptor(self) -> &'static LayerDescriptor {
        match self {
            Band::Network => &NETWORK_LAYER,
            Band::Switch => &SWITCH_LAYER,
            Band::Application => &APPLICATION_LAYER,
        }
    }

    /// Fraction of the canvas height at which the band's row sits.
    pub fn vertical_fraction(self) -> f32 {
        self.descriptor().vertical_fraction()
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Network => "network",
            Band::Switch => "switch",
            Band::Application => "application",
        };
        f.write_str(name)
    }
}

/// Vertical position and membership of a band.
#[derive(Debug, PartialEq)]
pub struct LayerDescriptor {
    vertical_fraction: f32,
    categories: &'static [DeviceCategory],
}

impl LayerDescriptor {
    /// Fraction of the canvas height, in `[0, 1]`.
    pub fn vertical_fraction(&self) -> f32 {
        self.vertical_fraction
    }

    /// Categories placed in this band.
    pub fn categories(&self) -> &'static [DeviceCategory] {
        self.categories
    }

    pub fn contains(&self, category: DeviceCategory) -> bool {
        self.categories.contains(&category)
    }
}

static NETWORK_LAYER: LayerDescriptor = LayerDescriptor {
    vertical_fraction: 0.15,
    categories: &[DeviceCategory::Router, DeviceCategory::Firewall],
};

static SWITCH_LAYER: LayerDescriptor = LayerDescriptor {
    vertical_fraction: 0.45,
    categories: &[
        DeviceCategory::SwitchCore,
        DeviceCategory::SwitchAccess,
        DeviceCategory::LoadBalancer,
    ],
};

static APPLICATION_LAYER: LayerDescriptor = LayerDescriptor {
    vertical_fraction: 0.75,
    categories: &[DeviceCategory::Vm, DeviceCategory::Host],
};

impl DeviceCategory {
    /// Returns the band this category is placed in.
    pub fn band(self) -> Band {
        match self {
            DeviceCategory::Router | DeviceCategory::Firewall => Band::Network,
            DeviceCategory::SwitchCore
            | DeviceCategory::SwitchAccess
            | DeviceCategory::LoadBalancer => Band::Switch,
            DeviceCategory::Vm | DeviceCategory::Host => Band::Application,
        }
    }
}
