//! Relative Strength Index (RSI) indicator.

use super::ensure_finite;
use crate::error::{Result, SignalError};

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent
/// losses, using Wilder's smoothing. Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    #[allow(dead_code)]
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum input length: one extra close to form the first change.
    pub fn min_len(&self) -> usize {
        self.period + 1
    }

    /// Compute the RSI series, aligned to the tail of the input.
    ///
    /// Output length is `closes.len() - period`; every value is in
    /// [0, 100].
    pub fn compute(&self, closes: &[f64]) -> Result<Vec<f64>> {
        ensure_finite("rsi", closes)?;
        if closes.len() < self.min_len() {
            return Err(SignalError::InsufficientData {
                required: self.min_len(),
                actual: closes.len(),
            });
        }

        let mut gains = Vec::with_capacity(closes.len() - 1);
        let mut losses = Vec::with_capacity(closes.len() - 1);
        for pair in closes.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        // Seed averages, then Wilder's smoothing for the rest
        let mut avg_gain = gains.iter().take(self.period).sum::<f64>() / self.period as f64;
        let mut avg_loss = losses.iter().take(self.period).sum::<f64>() / self.period as f64;

        let mut out = Vec::with_capacity(gains.len() - self.period + 1);
        out.push(Self::rsi_value(avg_gain, avg_loss));

        for i in self.period..gains.len() {
            avg_gain = (avg_gain * (self.period - 1) as f64 + gains[i]) / self.period as f64;
            avg_loss = (avg_loss * (self.period - 1) as f64 + losses[i]) / self.period as f64;
            out.push(Self::rsi_value(avg_gain, avg_loss));
        }

        Ok(out)
    }

    fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return 100.0;
        }
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}
