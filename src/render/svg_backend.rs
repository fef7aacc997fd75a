use std::path::Path as FsPath;

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Line, Path, Rectangle, Text};

use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer backend that serializes each frame into a standalone SVG document.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Option<Color>,
    markup: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: Some(Color::rgb(1.0, 1.0, 1.0)),
            markup: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `color` as the full-canvas background, or no background when `None`.
    pub fn set_background(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.background = color;
        Ok(())
    }

    /// SVG markup of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn save(&self, path: impl AsRef<FsPath>) -> ChartResult<()> {
        std::fs::write(path, &self.markup)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut document = Document::new()
            .set("width", f64::from(width))
            .set("height", f64::from(height))
            .set("viewBox", format!("0 0 {width} {height}"));

        if let Some(background) = self.background {
            document = document.add(rect_element(&RectPrimitive::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
                background,
            )));
        }

        let mut stats = SvgRenderStats::default();
        for path in &frame.paths {
            document = document.add(path_element(path));
            stats.paths_drawn += 1;
        }
        for rect in &frame.rects {
            document = document.add(rect_element(rect));
            stats.rects_drawn += 1;
        }
        for line in &frame.lines {
            document = document.add(line_element(line));
            stats.lines_drawn += 1;
        }
        for text in &frame.texts {
            document = document.add(text_element(text));
            stats.texts_drawn += 1;
        }

        self.markup = document.to_string();
        self.last_stats = stats;
        Ok(())
    }
}

fn path_element(path: &PathPrimitive) -> Path {
    let mut points = path.points.iter();
    let mut data = Data::new();
    if let Some(&(x, y)) = points.next() {
        data = data.move_to((x as f32, y as f32));
    }
    for &(x, y) in points {
        data = data.line_to((x as f32, y as f32));
    }
    if path.closed {
        data = data.close();
    }

    let mut element = Path::new().set("d", data);
    element = match path.fill_color {
        Some(color) => element
            .set("fill", color.to_hex())
            .set("fill-opacity", color.alpha),
        None => element.set("fill", "none"),
    };
    if let Some(color) = path.stroke_color {
        element = element
            .set("stroke", color.to_hex())
            .set("stroke-opacity", color.alpha)
            .set("stroke-width", path.stroke_width);
    }
    element
}

fn rect_element(rect: &RectPrimitive) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.width)
        .set("height", rect.height)
        .set("fill", rect.fill_color.to_hex())
        .set("fill-opacity", rect.fill_color.alpha)
}

fn line_element(line: &LinePrimitive) -> Line {
    Line::new()
        .set("x1", line.x1)
        .set("y1", line.y1)
        .set("x2", line.x2)
        .set("y2", line.y2)
        .set("stroke", line.color.to_hex())
        .set("stroke-opacity", line.color.alpha)
        .set("stroke-width", line.stroke_width)
}

fn text_element(text: &TextPrimitive) -> Text {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let mut element = Text::new(text.text.clone())
        .set("x", text.x)
        .set("y", text.y)
        .set("font-family", "sans-serif")
        .set("font-size", text.font_size_px)
        .set("text-anchor", anchor)
        .set("fill", text.color.to_hex());
    if text.bold {
        element = element.set("font-weight", "bold");
    }
    element
}
