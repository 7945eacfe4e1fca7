// File: crates/easel-core/src/axis.rs
// Summary: "Nice" value-axis range: segment count and expanded bounds on round step sizes.

use crate::error::{ChartError, Result};

/// Step multipliers tried in order, each scaled by the range's power of ten.
pub const STEP_MULTIPLIERS: [f64; 7] = [0.2, 0.25, 0.5, 1.0, 2.0, 2.5, 5.0];
/// Largest number of gridline segments a nice range may use.
pub const MAX_SEGMENTS: u32 = 6;
/// Segment count reported when no multiplier fits.
pub const FALLBACK_SEGMENTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub segment_count: u32,
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    pub fn step(&self) -> f64 {
        self.span() / self.segment_count as f64
    }

    /// Whether no nice step matched and the input range was kept as is.
    pub fn is_fallback(&self) -> bool {
        self.segment_count == FALLBACK_SEGMENTS
    }

    /// One value per gridline, from `high` down to `low`.
    pub fn gridline_values(&self) -> Vec<f64> {
        let n = self.segment_count;
        (0..=n)
            .map(|i| self.high - self.span() * i as f64 / n as f64)
            .collect()
    }
}

/// Expand `[low, high]` outward to multiples of a round step so that it splits into at
/// most [`MAX_SEGMENTS`] segments.
///
/// The magnitude is `floor(log10(high - low))`; candidates are tried in
/// [`STEP_MULTIPLIERS`] order and the first one yielding `<= MAX_SEGMENTS` wins. If
/// none does, `(FALLBACK_SEGMENTS, low, high)` is returned unchanged.
///
/// `low >= high` or non-finite bounds have no magnitude and are rejected.
pub fn nice_range(low: f64, high: f64) -> Result<AxisRange> {
    if !low.is_finite() || !high.is_finite() || high <= low {
        return Err(ChartError::degenerate(low, high));
    }

    let magnitude = (high - low).log10().floor();
    let scale = 10f64.powf(magnitude);

    for m in STEP_MULTIPLIERS {
        let step = m * scale;
        let adj_low = (low / step).floor() * step;
        let adj_high = (high / step).ceil() * step;
        let segments = ((adj_high - adj_low) / step).round();

        if segments <= MAX_SEGMENTS as f64 {
            return Ok(AxisRange { segment_count: segments as u32, low: adj_low, high: adj_high });
        }
    }

    Ok(AxisRange { segment_count: FALLBACK_SEGMENTS, low, high })
}
