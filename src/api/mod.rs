mod area_chart;
mod bar_chart;
mod chart_config;
mod dataset;
mod json_contract;
mod label_format;
mod plot_canvas;
mod render_style;

pub use area_chart::{AreaChart, render_area_chart};
pub use bar_chart::{BarChart, PERCENTAGE_AXIS_MAX, render_bar_chart};
pub use chart_config::{ChartConfig, MAX_VALUE_TICK_COUNT};
pub use dataset::{load_population_csv, read_population_csv, shelter_shares};
pub use json_contract::{TOOLTIP_STATE_JSON_SCHEMA_V1, TooltipStateJsonContractV1};
pub use label_format::{
    MONTH_TICK_PATTERN, TOOLTIP_DATE_PATTERN, format_axis_number, format_grouped_integer,
    format_month_tick, format_percentage, format_percentage_tick, format_population_label,
    format_tooltip_date,
};
pub use render_style::RenderStyle;
