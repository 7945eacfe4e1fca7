// File: crates/easel-core/src/scale.rs
// Summary: Unit-square mappings shared by gridlines and samples (plot area <- [0,1]^2 -> values).

use crate::affine::Affine;
use crate::axis::AxisRange;
use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Normalized space `[0,1]^2` mapped to plot pixels and to (index, value) space.
///
/// Normalized y grows downward in both mappings, so `y = 0` is the top gridline (the
/// range's `high`) and `y = 1` the bottom one (`low`).
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub to_area: Affine,
    pub to_value: Affine,
    value_to_area: Affine,
}

impl PlotScale {
    pub fn new(area: Rect, range: &AxisRange, sample_count: usize) -> Result<Self> {
        let to_area = normalized_to_area(area);
        let to_value = normalized_to_value(range, sample_count);
        let value_to_area = to_area * to_value.inverse()?;
        Ok(Self { to_area, to_value, value_to_area })
    }

    pub fn area_point(&self, nx: f64, ny: f64) -> Point {
        self.to_area.transform_point(Point::new(nx, ny))
    }

    /// Data value shown at normalized height `ny`.
    pub fn value_at(&self, ny: f64) -> f64 {
        self.to_value.transform_point(Point::new(0.0, ny)).y
    }

    /// Pixel position of sample `index` with value `value`.
    pub fn sample_to_px(&self, index: usize, value: f64) -> Point {
        self.value_to_area.transform_point(Point::new(index as f64, value))
    }
}

pub fn normalized_to_area(area: Rect) -> Affine {
    let mut m = Affine::IDENTITY;
    m.translate(area.left(), area.top()).scale(area.width, area.height);
    m
}

pub fn normalized_to_value(range: &AxisRange, sample_count: usize) -> Affine {
    let mut m = Affine::IDENTITY;
    m.translate(0.0, range.high)
        .scale(1.0, -1.0)
        .scale(sample_count.saturating_sub(1) as f64, range.span());
    m
}
