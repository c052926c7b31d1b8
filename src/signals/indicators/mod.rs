//! Technical indicator implementations.
//!
//! Each indicator is a pure transform over ordered numeric series: no
//! side effects, no state retained across calls. Outputs are aligned to
//! the tail of the input, so the last element is always the "current"
//! value.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use atr::Atr;
pub use bollinger::BollingerBands;
pub use ema::Ema;
pub use macd::Macd;
pub use rsi::Rsi;

use crate::error::{Result, SignalError};

/// Reject series containing NaN or infinities before any math runs.
pub(crate) fn ensure_finite(name: &str, values: &[f64]) -> Result<()> {
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(SignalError::InvalidInput(format!(
            "{} input contains a non-finite value at index {}",
            name, idx
        )));
    }
    Ok(())
}
