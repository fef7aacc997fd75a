use crate::core::{Margins, PlotArea, Viewport};
use crate::render::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;

/// Baseline shift for labels hanging below a tick (fraction of font size).
const HANGING_BASELINE_EM: f64 = 0.71;
/// Baseline shift for labels vertically centered on a tick.
const CENTERED_BASELINE_EM: f64 = 0.32;

/// Frame builder working in plot coordinates.
///
/// Every primitive is translated by the left/top margins on the way in, so
/// chart code never handles outer-chart offsets.
pub(super) struct PlotCanvas {
    frame: RenderFrame,
    offset_x: f64,
    offset_y: f64,
    plot: PlotArea,
}

impl PlotCanvas {
    pub(super) fn new(viewport: Viewport, margins: Margins, plot: PlotArea) -> Self {
        Self {
            frame: RenderFrame::new(viewport),
            offset_x: margins.left,
            offset_y: margins.top,
            plot,
        }
    }

    pub(super) fn plot(&self) -> PlotArea {
        self.plot
    }

    pub(super) fn into_frame(self) -> RenderFrame {
        self.frame
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.frame.lines.push(LinePrimitive::new(
            x1 + self.offset_x,
            y1 + self.offset_y,
            x2 + self.offset_x,
            y2 + self.offset_y,
            width,
            color,
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        self.frame.rects.push(RectPrimitive::new(
            x + self.offset_x,
            y + self.offset_y,
            width,
            height,
            fill,
        ));
    }

    pub(super) fn path(&mut self, mut path: PathPrimitive) {
        for point in &mut path.points {
            point.0 += self.offset_x;
            point.1 += self.offset_y;
        }
        self.frame.paths.push(path);
    }

    pub(super) fn text(&mut self, mut text: TextPrimitive) {
        text.x += self.offset_x;
        text.y += self.offset_y;
        self.frame.texts.push(text);
    }

    pub(super) fn title(&mut self, title: &str, style: &RenderStyle) {
        if title.is_empty() {
            return;
        }
        self.text(
            TextPrimitive::new(
                title,
                self.plot.width / 2.0,
                style.title_y_px,
                style.title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }

    /// Axis along the plot bottom with downward ticks at `ticks` (x, label).
    pub(super) fn bottom_axis(&mut self, ticks: &[(f64, String)], style: &RenderStyle) {
        let y = self.plot.height;
        self.line(
            0.0,
            y,
            self.plot.width,
            y,
            style.axis_line_width,
            style.axis_color,
        );

        let label_y = y
            + style.axis_tick_size_px
            + style.axis_label_padding_px
            + style.axis_font_size_px * HANGING_BASELINE_EM;
        for (x, label) in ticks {
            self.line(
                *x,
                y,
                *x,
                y + style.axis_tick_size_px,
                style.axis_line_width,
                style.axis_color,
            );
            if !label.is_empty() {
                self.text(TextPrimitive::new(
                    label.as_str(),
                    *x,
                    label_y,
                    style.axis_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    /// Axis along the plot left edge with leftward ticks at `ticks` (y, label).
    pub(super) fn left_axis(&mut self, ticks: &[(f64, String)], style: &RenderStyle) {
        self.line(
            0.0,
            0.0,
            0.0,
            self.plot.height,
            style.axis_line_width,
            style.axis_color,
        );

        let label_x = -(style.axis_tick_size_px + style.axis_label_padding_px);
        for (y, label) in ticks {
            self.line(
                -style.axis_tick_size_px,
                *y,
                0.0,
                *y,
                style.axis_line_width,
                style.axis_color,
            );
            if !label.is_empty() {
                self.text(TextPrimitive::new(
                    label.as_str(),
                    label_x,
                    *y + style.axis_font_size_px * CENTERED_BASELINE_EM,
                    style.axis_font_size_px,
                    style.text_color,
                    TextHAlign::Right,
                ));
            }
        }
    }
}
