use tracing::{debug, trace};

use crate::core::{
    LinearScale, ObservationSeries, PlotArea, TimeScale, linear_ticks, month_ticks,
    project_area_geometry,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{PointerEvent, TooltipPlacement, TooltipState};
use crate::render::{PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::label_format::{
    format_axis_number, format_month_tick, format_population_label, format_tooltip_date,
};
use super::plot_canvas::PlotCanvas;

/// Population area chart with a nearest-point hover tooltip.
///
/// Holds the series read-only for its whole lifetime; pointer handlers are
/// pure functions of the series and the config.
#[derive(Debug, Clone)]
pub struct AreaChart {
    config: ChartConfig,
    plot: PlotArea,
    series: ObservationSeries,
    scales: Option<(TimeScale, LinearScale)>,
}

impl AreaChart {
    pub fn new(config: ChartConfig, series: ObservationSeries) -> ChartResult<Self> {
        let plot = config.validate()?;
        let scales = if series.is_empty() {
            None
        } else {
            let time_scale = TimeScale::from_series(&series, plot.width)?;
            let max_value = series.max_value().unwrap_or(0) as f64;
            let value_scale = LinearScale::for_values(max_value, plot.height)?;
            Some((time_scale, value_scale))
        };
        debug!(
            count = series.len(),
            plot_width = plot.width,
            plot_height = plot.height,
            "area chart ready"
        );
        Ok(Self {
            config,
            plot,
            series,
            scales,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn series(&self) -> &ObservationSeries {
        &self.series
    }

    #[must_use]
    pub fn time_scale(&self) -> Option<TimeScale> {
        self.scales.map(|(time_scale, _)| time_scale)
    }

    #[must_use]
    pub fn value_scale(&self) -> Option<LinearScale> {
        self.scales.map(|(_, value_scale)| value_scale)
    }

    /// Resolves the tooltip for a pointer position in outer-chart coordinates.
    ///
    /// Pointers outside the plot rectangle hide the tooltip. Inside it, an
    /// empty series is reported as [`ChartError::EmptySequence`].
    pub fn on_pointer_move(&self, event: PointerEvent) -> ChartResult<TooltipState> {
        if !event.x.is_finite() || !event.y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let plot_x = event.x - self.config.margins.left;
        let plot_y = event.y - self.config.margins.top;
        if !self.plot.contains(plot_x, plot_y) {
            trace!(plot_x, plot_y, "pointer outside plot overlay");
            return Ok(TooltipState::hidden());
        }

        self.tooltip_at_plot_x(plot_x)
    }

    /// Pointer left the chart: the tooltip is hidden.
    #[must_use]
    pub fn on_pointer_leave(&self) -> TooltipState {
        TooltipState::hidden()
    }

    /// Tooltip for the observation nearest to plot-space `plot_x`.
    pub fn tooltip_at_plot_x(&self, plot_x: f64) -> ChartResult<TooltipState> {
        let (time_scale, value_scale) = self.scales.ok_or(ChartError::EmptySequence)?;
        let query = time_scale.pixel_to_time(plot_x)?;
        let observation = *self.series.locate(query)?;

        let anchor_x = time_scale.date_to_pixel(observation.date)?;
        let anchor_y = value_scale.domain_to_pixel(observation.value as f64)?;
        let placement =
            TooltipPlacement::resolve(anchor_x, self.plot.width, self.config.tooltip_width);
        trace!(
            %query,
            date = %observation.date,
            value = observation.value,
            ?placement,
            "tooltip resolved"
        );

        Ok(TooltipState {
            visible: true,
            anchor_x,
            anchor_y,
            placement,
            date_label: format_tooltip_date(observation.date),
            value_label: format_population_label(observation.value),
            observation: Some(observation),
        })
    }

    /// Builds the chart scene, with the tooltip overlay when one is visible.
    pub fn render_frame(&self, tooltip: Option<&TooltipState>) -> ChartResult<RenderFrame> {
        let style = &self.config.style;
        let mut canvas = PlotCanvas::new(self.config.viewport, self.config.margins, self.plot);

        let (time_ticks, value_ticks) = match self.scales {
            Some((time_scale, value_scale)) => {
                let geometry = project_area_geometry(
                    &self.series,
                    time_scale,
                    value_scale,
                    self.plot.height,
                )?;
                if geometry.line_points.len() >= 2 {
                    canvas.path(PathPrimitive::polygon(
                        geometry.fill_polygon.iter().map(|v| (v.x, v.y)).collect(),
                        style.area_fill_color,
                    ));
                    canvas.path(PathPrimitive::polyline(
                        geometry.line_points.iter().map(|v| (v.x, v.y)).collect(),
                        style.line_width,
                        style.line_color,
                    ));
                }
                (
                    self.time_axis_ticks(time_scale)?,
                    self.value_axis_ticks(value_scale)?,
                )
            }
            None => (Vec::new(), Vec::new()),
        };

        canvas.bottom_axis(&time_ticks, style);
        canvas.left_axis(&value_ticks, style);
        canvas.title(&self.config.area_title, style);

        if let Some(tooltip) = tooltip.filter(|state| state.visible) {
            self.draw_tooltip(&mut canvas, tooltip);
        }

        Ok(canvas.into_frame())
    }

    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        tooltip: Option<&TooltipState>,
    ) -> ChartResult<()> {
        let frame = self.render_frame(tooltip)?;
        renderer.render(&frame)
    }

    fn time_axis_ticks(&self, time_scale: TimeScale) -> ChartResult<Vec<(f64, String)>> {
        let (start, end) = time_scale.date_range();
        month_ticks(start, end, self.config.time_tick_every_months)?
            .into_iter()
            .map(|date| Ok((time_scale.date_to_pixel(date)?, format_month_tick(date))))
            .collect()
    }

    fn value_axis_ticks(&self, value_scale: LinearScale) -> ChartResult<Vec<(f64, String)>> {
        let (start, end) = value_scale.domain();
        linear_ticks(start, end, self.config.value_tick_count)?
            .into_iter()
            .map(|value| Ok((value_scale.domain_to_pixel(value)?, format_axis_number(value))))
            .collect()
    }

    fn draw_tooltip(&self, canvas: &mut PlotCanvas, tooltip: &TooltipState) {
        let style = &self.config.style;
        let plot_height = canvas.plot().height;
        canvas.line(
            tooltip.anchor_x,
            self.config.tooltip_guide_top,
            tooltip.anchor_x,
            plot_height,
            style.tooltip_line_width,
            style.tooltip_line_color,
        );

        let (text_x, h_align) = match tooltip.placement {
            TooltipPlacement::Right => (
                tooltip.anchor_x + style.tooltip_text_offset_px,
                TextHAlign::Left,
            ),
            TooltipPlacement::Left => (
                tooltip.anchor_x - style.tooltip_text_offset_px,
                TextHAlign::Right,
            ),
        };
        for (label, y) in [
            (&tooltip.value_label, style.tooltip_value_label_y_px),
            (&tooltip.date_label, style.tooltip_date_label_y_px),
        ] {
            if label.is_empty() {
                continue;
            }
            canvas.text(TextPrimitive::new(
                label.as_str(),
                text_x,
                y,
                style.tooltip_font_size_px,
                style.text_color,
                h_align,
            ));
        }
    }
}

/// One-shot render of the population chart without a tooltip.
pub fn render_area_chart(
    config: &ChartConfig,
    series: &ObservationSeries,
) -> ChartResult<RenderFrame> {
    AreaChart::new(config.clone(), series.clone())?.render_frame(None)
}
