//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::Ema;
use crate::error::{Result, SignalError};
use crate::types::MacdPoint;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// Minimum number of input values required.
    pub fn min_len(&self) -> usize {
        self.slow_period + self.signal_period
    }

    /// Compute the MACD series, aligned to the tail of the input.
    ///
    /// Output length is `closes.len() - slow - signal + 2`.
    pub fn compute(&self, closes: &[f64]) -> Result<Vec<MacdPoint>> {
        if closes.len() < self.min_len() {
            return Err(SignalError::InsufficientData {
                required: self.min_len(),
                actual: closes.len(),
            });
        }

        let fast_ema = Ema::new(self.fast_period).compute(closes)?;
        let slow_ema = Ema::new(self.slow_period).compute(closes)?;

        // Align the EMAs (the fast series starts earlier)
        let offset = self.slow_period - self.fast_period;
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::new(self.signal_period).compute(&macd_line)?;

        // Signal line starts signal_period - 1 points into the MACD line
        Ok(macd_line
            .iter()
            .skip(self.signal_period - 1)
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdPoint {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect())
    }
}
