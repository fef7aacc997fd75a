use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::core::{BandScale, LinearScale, ShelterShare};
use crate::error::{ChartError, ChartResult};

/// Vertical gap between a bar top and its percentage label baseline.
pub const BAR_LABEL_OFFSET_PX: f64 = 5.0;

/// Deterministic band-bar geometry in plot-space pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Projects shelter shares into bars standing on `baseline_y`.
///
/// Shares are drawn at face value; nothing rescales them to a 100% total.
pub fn project_bars(
    shares: &[ShelterShare],
    band_scale: &BandScale,
    value_scale: LinearScale,
    baseline_y: f64,
) -> ChartResult<Vec<BarGeometry>> {
    let mut projected = Vec::with_capacity(shares.len());
    for share in shares {
        let x = band_scale.band_start(&share.label).ok_or_else(|| {
            ChartError::InvalidData(format!("unknown band category `{}`", share.label))
        })?;
        let percentage = decimal_to_f64(share.percentage, "percentage")?;
        let y = value_scale.domain_to_pixel(percentage)?;
        let width = band_scale.bandwidth();

        projected.push(BarGeometry {
            x,
            y,
            width,
            height: (baseline_y - y).max(0.0),
            label_x: x + width * 0.5,
            label_y: y - BAR_LABEL_OFFSET_PX,
        });
    }

    Ok(projected)
}
