//! Signal engine: the single-owner mutable core.
//!
//! Owns the latest snapshot and the session state and applies
//! observations in arrival order. All methods are synchronous and never
//! block. Errors are local to one cycle; a failed cycle leaves the prior
//! valid state in place.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, SignalError};
use crate::signals::{build_snapshot, gate};
use crate::types::{
    IndicatorSnapshot, OhlcBar, PriceTick, Recommendation, SessionState, SessionView, TradingMode,
};

/// Event-driven core for one trading session.
pub struct SignalEngine {
    config: Config,
    snapshot: Option<IndicatorSnapshot>,
    state: SessionState,
}

impl SignalEngine {
    /// Create a new engine in the configured initial mode.
    pub fn new(config: Config) -> Self {
        info!("signal engine ready for {}", config.symbol);
        Self {
            state: SessionState::new(config.initial_mode),
            snapshot: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply a periodic OHLCV history batch.
    ///
    /// Indicators recompute from the batch; any streamed override from
    /// earlier ticks is superseded. On error the previous snapshot and
    /// recommendation are retained and the cycle is skipped.
    pub fn on_batch_refresh(&mut self, bars: &[OhlcBar]) -> Result<()> {
        validate_bars(bars)?;
        let snapshot = build_snapshot(bars, None)?;
        let decision = gate::apply(&mut self.state, &snapshot);
        self.snapshot = Some(snapshot);
        let decision = decision?;
        debug!("batch refresh applied: {} bars, gate {:?}", bars.len(), decision);
        Ok(())
    }

    /// Apply one streamed price/volume tick.
    ///
    /// Overrides the snapshot's price and volume for freshness; indicator
    /// values stay batch-derived. Ticks arriving before the first batch
    /// are dropped.
    pub fn on_tick(&mut self, price: f64, volume: f64) -> Result<()> {
        let tick = PriceTick { price, volume };
        validate_tick(&tick)?;

        let Some(current) = self.snapshot.as_ref() else {
            debug!("tick before first batch dropped");
            return Ok(());
        };

        let snapshot = current.with_tick(price, volume);
        let decision = gate::apply(&mut self.state, &snapshot);
        self.snapshot = Some(snapshot);
        decision?;
        Ok(())
    }

    /// Switch trading modes. A real change atomically clears the current
    /// recommendation and signal price; repeating the current mode is a
    /// no-op.
    pub fn on_mode_change(&mut self, mode: TradingMode) {
        if self.state.set_mode(mode) {
            info!("trading mode changed to {}", mode.name());
        }
    }

    /// Latest complete snapshot, if a batch has been processed.
    pub fn snapshot(&self) -> Option<&IndicatorSnapshot> {
        self.snapshot.as_ref()
    }

    /// Current recommendation, if the gate has accepted one.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.state.current_recommendation.as_ref()
    }

    pub fn last_signal_price(&self) -> Option<f64> {
        self.state.last_signal_price
    }

    pub fn mode(&self) -> TradingMode {
        self.state.mode
    }

    /// Presentation view of the session state.
    pub fn session(&self) -> SessionView {
        self.state.view()
    }
}

fn validate_bars(bars: &[OhlcBar]) -> Result<()> {
    for (i, bar) in bars.iter().enumerate() {
        let fields = [bar.open, bar.high, bar.low, bar.close, bar.volume];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(SignalError::InvalidInput(format!(
                "bar {} contains a non-finite or negative value",
                i
            )));
        }
    }
    Ok(())
}

fn validate_tick(tick: &PriceTick) -> Result<()> {
    if !tick.price.is_finite()
        || !tick.volume.is_finite()
        || tick.price < 0.0
        || tick.volume < 0.0
    {
        return Err(SignalError::InvalidInput(format!(
            "tick rejected: price={} volume={}",
            tick.price, tick.volume
        )));
    }
    Ok(())
}
