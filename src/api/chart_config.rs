use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

use super::render_style::{RenderStyle, validate_render_style};

/// Upper bound on the requested value-axis tick count.
pub const MAX_VALUE_TICK_COUNT: usize = 100;

/// Chart setup passed explicitly to every chart; there is no global state.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    /// Width reserved for the tooltip box when deciding which side it goes on.
    pub tooltip_width: f64,
    /// Top end of the tooltip guide line, in plot coordinates.
    pub tooltip_guide_top: f64,
    pub band_padding: f64,
    pub time_tick_every_months: u32,
    pub value_tick_count: usize,
    pub area_title: String,
    pub bar_title: String,
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            tooltip_width: 120.0,
            tooltip_guide_top: 10.0,
            band_padding: 0.2,
            time_tick_every_months: 3,
            value_tick_count: 10,
            area_title: "Camp Population".to_owned(),
            bar_title: "Type of Shelter".to_owned(),
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tooltip_width(mut self, tooltip_width: f64) -> Self {
        self.tooltip_width = tooltip_width;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks every field and returns the resulting plot area.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;

        if !self.tooltip_width.is_finite() || self.tooltip_width < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tooltip_guide_top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip guide top must be finite".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !(1..=12).contains(&self.time_tick_every_months) {
            return Err(ChartError::InvalidData(
                "time tick cadence must be in 1..=12 months".to_owned(),
            ));
        }
        if !(1..=MAX_VALUE_TICK_COUNT).contains(&self.value_tick_count) {
            return Err(ChartError::InvalidData(format!(
                "value tick count must be in 1..={MAX_VALUE_TICK_COUNT}"
            )));
        }
        validate_render_style(self.style)?;

        Ok(plot)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart config: {e}")))
    }
}
