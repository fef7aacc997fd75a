//! Pointer-driven interaction: nearest-point lookup and tooltip state.

mod locator;
mod tooltip;

pub use locator::{locate, locate_index};
pub use tooltip::{PointerEvent, TooltipPlacement, TooltipState};
