//! Average True Range (ATR) indicator.

use super::ensure_finite;
use crate::error::{Result, SignalError};

/// ATR (Average True Range) indicator.
///
/// Measures volatility as the smoothed average of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    /// Minimum input length: one extra candle for the first true range.
    pub fn min_len(&self) -> usize {
        self.period + 1
    }

    /// Calculate True Range.
    fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();
        hl.max(hc).max(lc)
    }

    /// Compute the ATR series with Wilder's smoothing, aligned to the
    /// tail of the input. Output length is `closes.len() - period`.
    pub fn compute(&self, highs: &[f64], lows: &[f64], closes: &[f64]) -> Result<Vec<f64>> {
        if highs.len() != lows.len() || highs.len() != closes.len() {
            return Err(SignalError::InvalidInput(format!(
                "atr input columns differ in length: {} highs, {} lows, {} closes",
                highs.len(),
                lows.len(),
                closes.len()
            )));
        }
        ensure_finite("atr", highs)?;
        ensure_finite("atr", lows)?;
        ensure_finite("atr", closes)?;
        if closes.len() < self.min_len() {
            return Err(SignalError::InsufficientData {
                required: self.min_len(),
                actual: closes.len(),
            });
        }

        let mut true_ranges = Vec::with_capacity(closes.len() - 1);
        for i in 1..closes.len() {
            true_ranges.push(Self::true_range(highs[i], lows[i], closes[i - 1]));
        }

        // Seed with the mean of the first window, then smooth
        let mut atr = true_ranges.iter().take(self.period).sum::<f64>() / self.period as f64;
        let mut out = Vec::with_capacity(true_ranges.len() - self.period + 1);
        out.push(atr);

        for tr in true_ranges.iter().skip(self.period) {
            atr = (atr * (self.period - 1) as f64 + tr) / self.period as f64;
            out.push(atr);
        }

        Ok(out)
    }
}
