//! camp-charts: population area chart and shelter bar chart.
//!
//! Charts are built as backend-agnostic render frames and serialized to SVG
//! (or PNG with the `cairo-backend` feature). The area chart resolves its
//! hover tooltip through a nearest-point lookup over the observation series.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AreaChart, BarChart, ChartConfig};
pub use error::{ChartError, ChartResult};
