//! Specter - signal-derivation core for a single-asset trading dashboard
//!
//! Turns a rolling OHLCV history plus a live tick stream into technical
//! indicators (MACD, RSI, ATR, EMA, Bollinger Bands) and a gated
//! BUY/SELL/HOLD recommendation with target and stop-loss prices.
//! Transport and presentation live elsewhere; this crate only computes.

pub mod config;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod signals;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use engine::SignalEngine;
pub use error::{Result, SignalError};
pub use runtime::{EngineEvent, EngineHandle, EngineView};
pub use types::*;
