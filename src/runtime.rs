//! Async runtime wrapper around the signal engine.
//!
//! A single updater task owns the [`SignalEngine`]. Batch refreshes,
//! ticks, and mode changes from independent sources funnel through one
//! mpsc channel and are applied in arrival order; the task publishes a
//! complete [`EngineView`] over a watch channel after every event, so
//! consumers never observe a half-applied update. Dropping every handle
//! closes the channel and stops the task.

use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::SignalEngine;
use crate::error::{Result, SignalError};
use crate::types::{IndicatorSnapshot, OhlcBar, Recommendation, TradingMode};

/// Event capacity before senders back-pressure.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Observation or control event for the updater task.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Periodic OHLCV history batch.
    BatchRefresh(Vec<OhlcBar>),
    /// Streamed price/volume update.
    Tick { price: f64, volume: f64 },
    /// User-driven mode toggle.
    ModeChange(TradingMode),
}

/// Complete engine state, published after each applied event.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<IndicatorSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signal_price: Option<f64>,
    pub mode: TradingMode,
}

/// Handle to a spawned engine task.
#[derive(Clone)]
pub struct EngineHandle {
    events: mpsc::Sender<EngineEvent>,
    views: watch::Receiver<EngineView>,
}

impl EngineHandle {
    /// Spawn the updater task. Must be called from within a tokio
    /// runtime.
    pub fn spawn(config: Config) -> Self {
        let (events, mut rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let mut engine = SignalEngine::new(config);
        let (view_tx, views) = watch::channel(view_of(&engine));

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    EngineEvent::BatchRefresh(bars) => {
                        if let Err(e) = engine.on_batch_refresh(&bars) {
                            warn!("batch refresh dropped: {}", e);
                        }
                    }
                    EngineEvent::Tick { price, volume } => {
                        if let Err(e) = engine.on_tick(price, volume) {
                            warn!("tick dropped: {}", e);
                        }
                    }
                    EngineEvent::ModeChange(mode) => engine.on_mode_change(mode),
                }
                if view_tx.send(view_of(&engine)).is_err() {
                    break;
                }
            }
            info!("signal engine task stopped");
        });

        Self { events, views }
    }

    /// Send one observation or control event.
    pub async fn send(&self, event: EngineEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| SignalError::EngineStopped)
    }

    pub async fn batch_refresh(&self, bars: Vec<OhlcBar>) -> Result<()> {
        self.send(EngineEvent::BatchRefresh(bars)).await
    }

    pub async fn tick(&self, price: f64, volume: f64) -> Result<()> {
        self.send(EngineEvent::Tick { price, volume }).await
    }

    pub async fn set_mode(&self, mode: TradingMode) -> Result<()> {
        self.send(EngineEvent::ModeChange(mode)).await
    }

    /// Latest published view.
    pub fn view(&self) -> EngineView {
        self.views.borrow().clone()
    }

    /// Subscribe to view updates.
    pub fn subscribe(&self) -> watch::Receiver<EngineView> {
        self.views.clone()
    }
}

fn view_of(engine: &SignalEngine) -> EngineView {
    EngineView {
        snapshot: engine.snapshot().cloned(),
        recommendation: engine.recommendation().cloned(),
        last_signal_price: engine.last_signal_price(),
        mode: engine.mode(),
    }
}
