//! Exponential Moving Average (EMA).

use super::ensure_finite;
use crate::error::{Result, SignalError};

/// EMA (Exponential Moving Average) over a value series.
///
/// Like an SMA but gives more weight to recent values. The first output
/// is seeded with the SMA of the first `period` values; the rest use the
/// standard `2 / (period + 1)` smoothing factor.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of input values required.
    pub fn min_len(&self) -> usize {
        self.period
    }

    /// Compute the EMA series, aligned to the tail of the input.
    ///
    /// Output length is `values.len() - period + 1`.
    pub fn compute(&self, values: &[f64]) -> Result<Vec<f64>> {
        if self.period == 0 {
            return Err(SignalError::InvalidInput(
                "ema period must be positive".to_string(),
            ));
        }
        ensure_finite("ema", values)?;
        if values.len() < self.min_len() {
            return Err(SignalError::InsufficientData {
                required: self.min_len(),
                actual: values.len(),
            });
        }

        let multiplier = 2.0 / (self.period as f64 + 1.0);
        let mut out = Vec::with_capacity(values.len() - self.period + 1);

        // First EMA is the SMA of the seed window
        let mut ema = values.iter().take(self.period).sum::<f64>() / self.period as f64;
        out.push(ema);

        for value in values.iter().skip(self.period) {
            ema = (value - ema) * multiplier + ema;
            out.push(ema);
        }

        Ok(out)
    }
}
