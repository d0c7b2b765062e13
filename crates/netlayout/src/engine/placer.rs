//! Hierarchical initial placement.
//!
//! Devices are stacked in their category's band; networks get a row of their
//! own just below the switch band. Within a row, entities are spread evenly
//! and centered on the canvas.

use log::debug;
use rand::Rng;

use netlayout_core::{
    geometry::Point,
    layer::Band,
    topology::{Device, Network},
};

use crate::{config::LayoutConfig, state::LayoutState};

/// Assigns an initial position to every device and network.
///
/// Device coordinates receive independent uniform jitter of up to
/// `jitter_x`/`jitter_y` drawn from `rng`; networks are never jittered. Ids
/// are expected to be unique across devices and networks.
pub fn place<'a, R: Rng>(
    devices: impl IntoIterator<Item = &'a Device>,
    networks: impl IntoIterator<Item = &'a Network>,
    config: &LayoutConfig,
    rng: &mut R,
) -> LayoutState {
    let devices: Vec<&Device> = devices.into_iter().collect();
    let networks: Vec<&Network> = networks.into_iter().collect();
    let mut state = LayoutState::with_capacity(devices.len() + networks.len());

    for band in Band::ALL {
        let members: Vec<&Device> = devices
            .iter()
            .copied()
            .filter(|device| device.category().band() == band)
            .collect();
        if members.is_empty() {
            continue;
        }

        let y = band_y(band, config);
        let spacing = config.horizontal_spacing();
        let start_x = row_start_x(members.len(), spacing, config);
        debug!(band:% = band, count = members.len(), y = y, start_x = start_x; "Placing band");

        for (i, device) in members.into_iter().enumerate() {
            let base = Point::new(start_x + i as f32 * spacing, y);
            let offset = Point::new(
                jitter(rng, config.jitter_x()),
                jitter(rng, config.jitter_y()),
            );
            state.insert(device.id(), base.add_point(offset));
        }
    }

    if !networks.is_empty() {
        let y = band_y(Band::Switch, config) + config.network_row_offset();
        let spacing = config.horizontal_spacing() * config.network_spacing_ratio();
        let start_x = row_start_x(networks.len(), spacing, config);
        debug!(count = networks.len(), y = y, start_x = start_x; "Placing network row");

        for (i, network) in networks.into_iter().enumerate() {
            state.insert(network.id(), Point::new(start_x + i as f32 * spacing, y));
        }
    }

    state
}

/// Vertical coordinate of a band's row.
pub fn band_y(band: Band, config: &LayoutConfig) -> f32 {
    band.vertical_fraction() * config.canvas_height()
}

/// Leftmost x of a centered row of `count` entities, floored at the margin.
pub fn row_start_x(count: usize, spacing: f32, config: &LayoutConfig) -> f32 {
    let total_width = count.saturating_sub(1) as f32 * spacing;
    ((config.canvas_width() - total_width) / 2.0).max(config.margin())
}

fn jitter<R: Rng>(rng: &mut R, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.random_range(-amplitude..=amplitude)
    } else {
        0.0
    }
}
