pub mod area_series;
pub mod band_scale;
pub mod bar_series;
pub mod primitives;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use band_scale::BandScale;
pub use bar_series::{BAR_LABEL_OFFSET_PX, BarGeometry, project_bars};
pub use scale::LinearScale;
pub use ticks::{linear_ticks, month_ticks};
pub use time_scale::TimeScale;
pub use types::{
    Margins, Observation, ObservationSeries, PlotArea, ShelterShare, Viewport, midnight,
};
