use std::env;

use crate::types::TradingMode;

/// Core configuration.
///
/// Carries the contract values the transport collaborator needs to feed
/// the engine: which symbol to watch, how much history each batch should
/// hold, and how often to refresh it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exchange symbol to watch (e.g. "SOLUSDT").
    pub symbol: String,
    /// Number of candles per history batch.
    pub history_limit: usize,
    /// Seconds between history batch refreshes.
    pub refresh_interval_secs: u64,
    /// Trading mode the session starts in.
    pub initial_mode: TradingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "SOLUSDT".to_string(),
            history_limit: 100,
            refresh_interval_secs: 60,
            initial_mode: TradingMode::Standard,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            symbol: env::var("SPECTER_SYMBOL").unwrap_or(defaults.symbol),
            history_limit: env::var("SPECTER_HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.history_limit),
            refresh_interval_secs: env::var("SPECTER_REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval_secs),
            initial_mode: env::var("SPECTER_MODE")
                .ok()
                .and_then(|v| TradingMode::from_str(&v))
                .unwrap_or(defaults.initial_mode),
        }
    }
}
