use tracing::debug;

use crate::core::{BandScale, LinearScale, PlotArea, ShelterShare, linear_ticks, project_bars};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::label_format::{format_percentage, format_percentage_tick};
use super::plot_canvas::PlotCanvas;

/// Upper end of the percentage axis. Bars are never rescaled to fill it.
pub const PERCENTAGE_AXIS_MAX: f64 = 100.0;

/// Shelter-type bar chart on a fixed 0..100% axis.
#[derive(Debug, Clone)]
pub struct BarChart {
    config: ChartConfig,
    plot: PlotArea,
    shares: Vec<ShelterShare>,
    band_scale: BandScale,
    value_scale: LinearScale,
}

impl BarChart {
    pub fn new(config: ChartConfig, shares: Vec<ShelterShare>) -> ChartResult<Self> {
        let plot = config.validate()?;
        let band_scale = BandScale::new(
            shares.iter().map(|share| share.label.clone()),
            plot.width,
            config.band_padding,
        )?;
        let value_scale = LinearScale::new(0.0, PERCENTAGE_AXIS_MAX, plot.height, 0.0)?;
        debug!(
            bars = shares.len(),
            bandwidth = band_scale.bandwidth(),
            "bar chart ready"
        );
        Ok(Self {
            config,
            plot,
            shares,
            band_scale,
            value_scale,
        })
    }

    #[must_use]
    pub fn shares(&self) -> &[ShelterShare] {
        &self.shares
    }

    #[must_use]
    pub fn band_scale(&self) -> &BandScale {
        &self.band_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> LinearScale {
        self.value_scale
    }

    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let style = &self.config.style;
        let mut canvas = PlotCanvas::new(self.config.viewport, self.config.margins, self.plot);

        let bars = project_bars(
            &self.shares,
            &self.band_scale,
            self.value_scale,
            self.plot.height,
        )?;
        for bar in &bars {
            canvas.rect(bar.x, bar.y, bar.width, bar.height, style.bar_fill_color);
        }

        let value_ticks = linear_ticks(0.0, PERCENTAGE_AXIS_MAX, self.config.value_tick_count)?
            .into_iter()
            .map(|value| {
                Ok((
                    self.value_scale.domain_to_pixel(value)?,
                    format_percentage_tick(value),
                ))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        let category_ticks = self
            .band_scale
            .categories()
            .filter_map(|label| {
                self.band_scale
                    .band_center(label)
                    .map(|x| (x, label.to_owned()))
            })
            .collect::<Vec<_>>();

        canvas.left_axis(&value_ticks, style);
        canvas.bottom_axis(&category_ticks, style);
        canvas.title(&self.config.bar_title, style);

        for (share, bar) in self.shares.iter().zip(&bars) {
            canvas.text(TextPrimitive::new(
                format_percentage(share.percentage),
                bar.label_x,
                bar.label_y,
                style.bar_label_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        Ok(canvas.into_frame())
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.render_frame()?;
        renderer.render(&frame)
    }
}

/// One-shot render of the shelter bar chart.
pub fn render_bar_chart(config: &ChartConfig, shares: &[ShelterShare]) -> ChartResult<RenderFrame> {
    BarChart::new(config.clone(), shares.to_vec())?.render_frame()
}
