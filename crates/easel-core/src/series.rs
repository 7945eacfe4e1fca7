// File: crates/easel-core/src/series.rs
// Summary: Series model: ordered samples plotted against their index, plus a title.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Construct a series enforcing its invariants: at least one sample, all finite.
    pub fn try_new(title: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteSample { index });
        }
        Ok(Self { title: title.into(), values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (f64, f64) {
        self.values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Replace the samples, keeping the title. The same invariants apply.
    pub fn set_values(&mut self, values: Vec<f64>) -> Result<()> {
        let next = Self::try_new(String::new(), values)?;
        self.values = next.values;
        Ok(())
    }
}
