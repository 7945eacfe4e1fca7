// File: crates/easel-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and paints single-line labels from their top-left corner.

use easel_core::FontSpec;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and the paragraph height.
    pub fn measure(&self, text: &str, font: FontSpec) -> (f32, f32) {
        let p = self.layout(text, font, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: FontSpec, color: skia::Color) {
        let p = self.layout(text, font, color);
        p.paint(canvas, (x, y));
    }
}
