// File: crates/easel-core/src/chart.rs
// Summary: Chart control: margin layout, nice gridlines with value labels, and the series polyline.

use tracing::{debug, warn};

use crate::axis::{nice_range, AxisRange};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::scale::PlotScale;
use crate::series::ChartSeries;
use crate::surface::{DrawSurface, FontSpec, Pen};
use crate::text::{ellipsize_middle, format_value};
use crate::types::{ChartOptions, LABEL_MARGIN, MARGIN_FRACTION, TITLE_MIN_MARGIN};

/// Where the parts of the chart go for a given surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub full: Rect,
    pub plot: Rect,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Top-left corner of the title text.
    pub title_origin: Point,
    pub title_size: (f64, f64),
}

/// One horizontal gridline and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Gridline {
    pub start: Point,
    pub end: Point,
    pub value: f64,
    pub label: String,
}

pub struct ChartControl {
    pub series: ChartSeries,
    pub options: ChartOptions,
}

impl ChartControl {
    pub fn new(series: ChartSeries) -> Self {
        Self { series, options: ChartOptions::default() }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute margins and the plot area. Measures the title, so this sets the title font.
    pub fn layout<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> ChartLayout {
        let size = surface.size();
        let full = Rect::from_size(size);

        let (tw, th) = if self.options.draw_labels {
            surface.set_font(FontSpec::title().scaled(self.options.dpi_scale as f32), self.options.theme.title);
            surface.text_extent(&self.series.title)
        } else {
            (0.0, 0.0)
        };

        let min_margin = TITLE_MIN_MARGIN * self.options.dpi_scale;
        let margin_x = size.width * MARGIN_FRACTION;
        let margin_top = (size.height * MARGIN_FRACTION).max(min_margin * 2.0 + th);
        let margin_bottom = size.height * MARGIN_FRACTION;

        ChartLayout {
            full,
            plot: full.inset(margin_x, margin_top, margin_x, margin_bottom),
            margin_x,
            margin_top,
            margin_bottom,
            title_origin: Point::new((size.width - tw) / 2.0, (margin_top - th) / 2.0),
            title_size: (tw, th),
        }
    }

    /// Nice value range for the current samples.
    pub fn axis_range(&self) -> Result<AxisRange> {
        let (low, high) = self.series.min_max();
        nice_range(low, high)
    }

    /// Gridlines from top (range high) to bottom (range low), labels unclipped.
    pub fn gridlines(&self, scale: &PlotScale, range: &AxisRange) -> Vec<Gridline> {
        let n = range.segment_count;
        (0..=n)
            .map(|i| {
                let ny = i as f64 / n as f64;
                let value = scale.value_at(ny);
                Gridline {
                    start: scale.area_point(0.0, ny),
                    end: scale.area_point(1.0, ny),
                    value,
                    label: format_value(value),
                }
            })
            .collect()
    }

    /// Draw the whole chart. Fails without drawing samples when the series cannot be
    /// scaled (fewer than two samples, or all samples equal).
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let theme = self.options.theme;
        surface.clear(theme.background);

        let layout = self.layout(surface);
        if self.options.draw_labels {
            surface.draw_text(&self.series.title, layout.title_origin.x, layout.title_origin.y);
        }

        let len = self.series.len();
        if len < 2 {
            warn!(len, "chart needs at least two samples");
            return Err(ChartError::TooFewSamples { len });
        }
        let range = self.axis_range().inspect_err(|e| warn!("chart range: {e}"))?;
        let scale = PlotScale::new(layout.plot, &range, len)?;
        debug!(segments = range.segment_count, low = range.low, high = range.high, "chart axis");

        surface.set_pen(Pen::new(theme.grid));
        surface.set_font(FontSpec::normal().scaled(self.options.dpi_scale as f32), theme.axis_label);
        let label_margin = LABEL_MARGIN * self.options.dpi_scale;
        let label_right = layout.plot.left() - label_margin;

        for line in self.gridlines(&scale, &range) {
            surface.stroke_lines(&[line.start, line.end]);
            if self.options.draw_labels {
                let text = ellipsize_middle(surface, &line.label, label_right);
                let (tw, th) = surface.text_extent(&text);
                surface.draw_text(&text, label_right - tw, line.start.y - th / 2.0);
            }
        }

        draw_bounds(surface, &scale);
        draw_line_series(surface, &scale, self.series.values(), Pen::new(theme.line_stroke));
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_bounds<S: DrawSurface + ?Sized>(surface: &mut S, scale: &PlotScale) {
    surface.stroke_lines(&[scale.area_point(0.0, 0.0), scale.area_point(0.0, 1.0)]);
    surface.stroke_lines(&[scale.area_point(1.0, 0.0), scale.area_point(1.0, 1.0)]);
}

fn draw_line_series<S: DrawSurface + ?Sized>(surface: &mut S, scale: &PlotScale, values: &[f64], pen: Pen) {
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| scale.sample_to_px(i, v))
        .collect();
    surface.set_pen(pen);
    surface.stroke_lines(&points);
}
