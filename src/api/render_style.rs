use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths and font sizes shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub area_fill_color: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub bar_fill_color: Color,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub axis_tick_size_px: f64,
    pub axis_label_padding_px: f64,
    pub axis_font_size_px: f64,
    pub text_color: Color,
    pub title_font_size_px: f64,
    pub title_y_px: f64,
    pub bar_label_font_size_px: f64,
    pub tooltip_line_color: Color,
    pub tooltip_line_width: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_text_offset_px: f64,
    pub tooltip_value_label_y_px: f64,
    pub tooltip_date_label_y_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let steel_blue = Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
        Self {
            area_fill_color: Color::rgba(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 0.6),
            line_color: steel_blue,
            line_width: 2.0,
            bar_fill_color: steel_blue,
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            axis_tick_size_px: 6.0,
            axis_label_padding_px: 3.0,
            axis_font_size_px: 10.0,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            title_font_size_px: 16.0,
            title_y_px: 5.0,
            bar_label_font_size_px: 12.0,
            tooltip_line_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_line_width: 1.0,
            tooltip_font_size_px: 12.0,
            tooltip_text_offset_px: 10.0,
            tooltip_value_label_y_px: 20.0,
            tooltip_date_label_y_px: 45.0,
        }
    }
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    for color in [
        style.area_fill_color,
        style.line_color,
        style.bar_fill_color,
        style.axis_color,
        style.text_color,
        style.tooltip_line_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("line_width", style.line_width),
        ("axis_line_width", style.axis_line_width),
        ("axis_font_size_px", style.axis_font_size_px),
        ("title_font_size_px", style.title_font_size_px),
        ("bar_label_font_size_px", style.bar_label_font_size_px),
        ("tooltip_line_width", style.tooltip_line_width),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("axis_tick_size_px", style.axis_tick_size_px),
        ("axis_label_padding_px", style.axis_label_padding_px),
        ("tooltip_text_offset_px", style.tooltip_text_offset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("title_y_px", style.title_y_px),
        ("tooltip_value_label_y_px", style.tooltip_value_label_y_px),
        ("tooltip_date_label_y_px", style.tooltip_date_label_y_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite"
            )));
        }
    }

    Ok(style)
}
