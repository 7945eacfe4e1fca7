// File: crates/easel-render-skia/src/surface.rs
// Summary: `DrawSurface` implementation issuing commands to a Skia canvas.

use easel_core::{Affine, Color, DrawSurface, FontSpec, Pen, Point, Rect, Size};
use skia_safe as skia;

use crate::text::TextShaper;

pub(crate) fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_matrix(m: &Affine) -> skia::Matrix {
    skia::Matrix::new_all(
        m.a as f32, m.c as f32, m.e as f32,
        m.b as f32, m.d as f32, m.f as f32,
        0.0, 0.0, 1.0,
    )
}

/// Borrowed Skia canvas plus the pen/brush/font state the widgets expect.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    size: Size,
    stroke: skia::Paint,
    fill: skia::Paint,
    font: FontSpec,
    text_color: skia::Color,
    transform: Affine,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, width: i32, height: i32) -> Self {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(skia::Color::BLACK);

        canvas.reset_matrix();
        Self {
            canvas,
            shaper,
            size: Size::new(width as f64, height as f64),
            stroke,
            fill,
            font: FontSpec::normal(),
            text_color: skia::Color::BLACK,
            transform: Affine::IDENTITY,
        }
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_sk_color(color));
    }

    fn set_pen(&mut self, pen: Pen) {
        self.stroke.set_color(to_sk_color(pen.color));
        self.stroke.set_stroke_width(pen.width);
    }

    fn set_brush(&mut self, color: Color) {
        self.fill.set_color(to_sk_color(color));
    }

    fn set_font(&mut self, font: FontSpec, color: Color) {
        self.font = font;
        self.text_color = to_sk_color(color);
    }

    fn text_extent(&self, text: &str) -> (f64, f64) {
        let (w, h) = self.shaper.measure(text, self.font);
        (w as f64, h as f64)
    }

    fn stroke_lines(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        self.canvas.draw_path(&path, &self.stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
        self.canvas.draw_rect(r, &self.fill);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.shaper.draw(self.canvas, text, x as f32, y as f32, self.font, self.text_color);
    }

    fn set_transform(&mut self, transform: Affine) {
        self.canvas.reset_matrix();
        self.canvas.concat(&to_sk_matrix(&transform));
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }
}
