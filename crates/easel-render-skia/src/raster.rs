// File: crates/easel-render-skia/src/raster.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces; RGBA8 and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use easel_core::types::{HEIGHT, WIDTH};
use easel_core::{ChartControl, Color, DrawingCanvas};
use skia_safe as skia;
use tracing::debug;

use crate::surface::{to_sk_color, SkiaSurface};
use crate::text::TextShaper;

/// Output size. Background colors come from the widget themes, which clear the surface.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// Unpremultiplied RGBA8 pixels, rows tightly packed.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbaFrame {
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride() + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", self.width, self.height))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }
}

/// Create a raster surface cleared to transparent, run `draw` against it and read the pixels back.
pub fn render_rgba8<F>(opts: &RenderOptions, draw: F) -> Result<RgbaFrame>
where
    F: FnOnce(&mut SkiaSurface<'_>) -> Result<()>,
{
    if opts.width <= 0 || opts.height <= 0 {
        bail!("invalid surface size {}x{}", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(Color::TRANSPARENT));
        let mut target = SkiaSurface::new(canvas, &shaper, opts.width, opts.height);
        draw(&mut target)?;
    }

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        bail!("reading back raster pixels failed");
    }
    debug!(width = opts.width, height = opts.height, "rendered frame");
    Ok(RgbaFrame { pixels, width: opts.width as u32, height: opts.height as u32 })
}

pub fn render_chart_rgba8(chart: &ChartControl, opts: &RenderOptions) -> Result<RgbaFrame> {
    render_rgba8(opts, |s| chart.render(s).context("chart render"))
}

pub fn render_canvas_rgba8(canvas: &DrawingCanvas, opts: &RenderOptions) -> Result<RgbaFrame> {
    render_rgba8(opts, |s| {
        canvas.paint(s);
        Ok(())
    })
}

pub fn render_chart_png_bytes(chart: &ChartControl, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_chart_rgba8(chart, opts)?.to_png()
}

pub fn render_canvas_png_bytes(canvas: &DrawingCanvas, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_canvas_rgba8(canvas, opts)?.to_png()
}

/// Write PNG bytes to `path`, creating parent directories.
pub fn write_png(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
