//! Serializable layout payload for persisting positions.

use serde::{Deserialize, Serialize};

use netlayout_core::geometry::Point;
use netlayout_parser::ParsedTopology;

use crate::state::LayoutState;

/// A position rounded to whole canvas units.
///
/// Halfway values round to the nearest even integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i64,
    pub y: i64,
}

impl From<Point> for GridPosition {
    fn from(point: Point) -> Self {
        Self {
            x: round_coordinate(point.x()),
            y: round_coordinate(point.y()),
        }
    }
}

fn round_coordinate(value: f32) -> i64 {
    value.round_ties_even() as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePosition {
    pub device_id: String,
    pub position: GridPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPosition {
    pub network_id: String,
    pub position: GridPosition,
}

/// Positions of every laid-out device and network, in the shape a layout
/// store accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPayload {
    pub devices: Vec<DevicePosition>,
    pub networks: Vec<NetworkPosition>,
}

impl LayoutPayload {
    /// Builds the payload for the retained records of `topology`.
    ///
    /// Entities without a position in `state` are left out.
    pub fn from_state(topology: &ParsedTopology, state: &LayoutState) -> Self {
        let devices = topology
            .devices()
            .filter_map(|device| {
                state.get(device.id()).map(|point| DevicePosition {
                    device_id: device.id().to_string(),
                    position: point.into(),
                })
            })
            .collect();
        let networks = topology
            .networks()
            .filter_map(|network| {
                state.get(network.id()).map(|point| NetworkPosition {
                    network_id: network.id().to_string(),
                    position: point.into(),
                })
            })
            .collect();
        Self { devices, networks }
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.networks.is_empty()
    }
}
