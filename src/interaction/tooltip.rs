use serde::{Deserialize, Serialize};

use crate::core::Observation;

/// Side of the anchor point the tooltip box is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TooltipPlacement {
    #[default]
    Right,
    /// Mirrored to the left so the box is not clipped by the right plot edge.
    Left,
}

impl TooltipPlacement {
    /// Picks the side for an anchor at `pixel_x` in plot coordinates.
    ///
    /// Mirrors only when the anchor is strictly past `plot_width - tooltip_width`.
    #[must_use]
    pub fn resolve(pixel_x: f64, plot_width: f64, tooltip_width: f64) -> Self {
        if pixel_x > plot_width - tooltip_width {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Pointer position in outer-chart pixel coordinates (margins included).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tooltip state produced by one pointer notification.
///
/// Anchors are in plot coordinates. A hidden state carries no observation
/// and empty labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub placement: TooltipPlacement,
    pub date_label: String,
    pub value_label: String,
    pub observation: Option<Observation>,
}

impl TooltipState {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}
