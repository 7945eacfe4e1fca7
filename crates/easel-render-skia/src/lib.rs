// File: crates/easel-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts CPU raster surfaces and text shaping for the easel widgets.

pub mod raster;
pub mod surface;
pub mod text;

pub use raster::{
    render_canvas_png_bytes, render_canvas_rgba8, render_chart_png_bytes, render_chart_rgba8, render_rgba8,
    write_png, RenderOptions, RgbaFrame,
};
pub use surface::SkiaSurface;
pub use text::TextShaper;
