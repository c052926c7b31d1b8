//! Bollinger Bands indicator.

use super::ensure_finite;
use crate::error::{Result, SignalError};
use crate::types::BollingerPoint;

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    /// Minimum number of input values required.
    pub fn min_len(&self) -> usize {
        self.period
    }

    /// Population standard deviation.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Compute the band series over a rolling window, aligned to the tail
    /// of the input. Output length is `values.len() - period + 1`.
    pub fn compute(&self, values: &[f64]) -> Result<Vec<BollingerPoint>> {
        ensure_finite("bollinger", values)?;
        if values.len() < self.min_len() {
            return Err(SignalError::InsufficientData {
                required: self.min_len(),
                actual: values.len(),
            });
        }

        Ok(values
            .windows(self.period)
            .map(|window| {
                let middle = window.iter().sum::<f64>() / self.period as f64;
                let std_dev = Self::std_dev(window, middle);
                BollingerPoint {
                    upper: middle + self.std_dev_multiplier * std_dev,
                    middle,
                    lower: middle - self.std_dev_multiplier * std_dev,
                }
            })
            .collect())
    }
}
