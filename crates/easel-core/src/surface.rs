// File: crates/easel-core/src/surface.rs
// Summary: Drawing-surface abstraction consumed by the widgets, plus a headless recorder.
// Notes:
// - Coordinates are pixels in the surface's current transform. Text is positioned by
//   its top-left corner.
// - `RecordingSurface` measures text with a fixed advance so layouts are deterministic.

use crate::affine::Affine;
use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub const fn new(color: Color) -> Self {
        Self { color, width: 1.0 }
    }

    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Pixel size of the em box.
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const NORMAL_SIZE: f32 = 13.0;

    pub const fn normal() -> Self {
        Self { size: Self::NORMAL_SIZE, bold: false }
    }

    /// The chart title font: twice the normal size, bold.
    pub const fn title() -> Self {
        Self { size: Self::NORMAL_SIZE * 2.0, bold: true }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self { size: self.size * factor, ..self }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::normal()
    }
}

/// Primitive drawing commands a host graphics backend must provide.
pub trait DrawSurface {
    fn size(&self) -> Size;
    fn clear(&mut self, color: Color);
    fn set_pen(&mut self, pen: Pen);
    fn set_brush(&mut self, color: Color);
    fn set_font(&mut self, font: FontSpec, color: Color);
    /// Width and height of `text` in the current font.
    fn text_extent(&self, text: &str) -> (f64, f64);
    /// Stroke a connected polyline with the current pen.
    fn stroke_lines(&mut self, points: &[Point]);
    /// Fill a rectangle with the current brush.
    fn fill_rect(&mut self, rect: Rect);
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64);
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);
    fn transform(&self) -> Affine;
}

/// A command captured by [`RecordingSurface`], carrying the state it was issued with.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    StrokeLines { points: Vec<Point>, pen: Pen, transform: Affine },
    FillRect { rect: Rect, color: Color, transform: Affine },
    Text { text: String, x: f64, y: f64, font: FontSpec, color: Color, transform: Affine },
}

/// Headless surface that records every command; used by tests, benches and tooling.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    pen: Pen,
    brush: Color,
    font: FontSpec,
    text_color: Color,
    transform: Affine,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Horizontal advance per character, as a fraction of the font size.
    pub const ADVANCE: f64 = 0.6;
    /// Line height, as a fraction of the font size.
    pub const LINE_HEIGHT: f64 = 1.2;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            pen: Pen::default(),
            brush: Color::BLACK,
            font: FontSpec::normal(),
            text_color: Color::BLACK,
            transform: Affine::IDENTITY,
            commands: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeLines { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn set_brush(&mut self, color: Color) {
        self.brush = color;
    }

    fn set_font(&mut self, font: FontSpec, color: Color) {
        self.font = font;
        self.text_color = color;
    }

    fn text_extent(&self, text: &str) -> (f64, f64) {
        let size = self.font.size as f64;
        (text.chars().count() as f64 * size * Self::ADVANCE, size * Self::LINE_HEIGHT)
    }

    fn stroke_lines(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::StrokeLines {
            points: points.to_vec(),
            pen: self.pen,
            transform: self.transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect { rect, color: self.brush, transform: self.transform });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font: self.font,
            color: self.text_color,
            transform: self.transform,
        });
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }
}
