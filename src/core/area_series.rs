use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, ObservationSeries, TimeScale};
use crate::error::{ChartError, ChartResult};

/// Vertex in plot-space pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for an area series.
///
/// `line_points` follows the mapped observations.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects a series into area geometry with the fill closed at `baseline_y`.
pub fn project_area_geometry(
    series: &ObservationSeries,
    time_scale: TimeScale,
    value_scale: LinearScale,
    baseline_y: f64,
) -> ChartResult<AreaGeometry> {
    if !baseline_y.is_finite() {
        return Err(ChartError::InvalidData(
            "area baseline must be finite".to_owned(),
        ));
    }
    if series.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let mut line_points = Vec::with_capacity(series.len());
    for observation in series {
        let x = time_scale.date_to_pixel(observation.date)?;
        let y = value_scale.domain_to_pixel(observation.value as f64)?;
        line_points.push(AreaVertex { x, y });
    }

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex {
        x: last_x,
        y: baseline_y,
    });
    // Repeat the first baseline vertex so consumers need no implicit closure rule.
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
