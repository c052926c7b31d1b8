use serde::{Deserialize, Serialize};

/// Trading mode for signal classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TradingMode {
    /// Standard horizon: MACD + RSI rules, 2.5% targets.
    #[default]
    Standard,
    /// Short horizon: EMA cross + Bollinger geometry + volume, sub-1% targets.
    Scalping,
}

impl TradingMode {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "normal" => Some(Self::Standard),
            "scalping" | "scalp" => Some(Self::Scalping),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Scalping => "Scalping",
        }
    }

    /// Minimum relative price move before the gate recomputes a
    /// classification.
    pub fn price_change_threshold(&self) -> f64 {
        match self {
            Self::Standard => 0.02,
            Self::Scalping => 0.005,
        }
    }
}

/// Directional call of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationAction {
    Buy,
    Sell,
    Hold,
}

impl RecommendationAction {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationAction::Buy => "BUY",
            RecommendationAction::Sell => "SELL",
            RecommendationAction::Hold => "HOLD",
        }
    }
}

/// One point of the MACD series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD line: EMA(fast) - EMA(slow).
    pub macd: f64,
    /// Signal line: EMA of the MACD line.
    pub signal: f64,
    /// MACD line - signal line.
    pub histogram: f64,
}

/// One point of the Bollinger band series.
///
/// Invariant: `lower <= middle <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Current indicator state, rebuilt on every accepted observation.
///
/// All indicator fields derive from the same history batch; `price` and
/// `volume` may be fresher when a streamed tick has overridden them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub volume: f64,
    /// Arithmetic mean of the batch's volume column.
    pub average_volume: f64,
    pub macd: MacdPoint,
    /// Wilder's RSI, in [0, 100].
    pub rsi: f64,
    /// Average true range, >= 0.
    pub atr: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema9: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerPoint>,
    /// Unix timestamp (milliseconds) when built.
    pub timestamp: i64,
}

impl IndicatorSnapshot {
    /// Rebuild the snapshot with a fresher streamed price/volume.
    ///
    /// Indicator fields stay batch-derived until the next refresh.
    pub fn with_tick(&self, price: f64, volume: f64) -> Self {
        Self {
            price,
            volume,
            timestamp: chrono::Utc::now().timestamp_millis(),
            ..self.clone()
        }
    }
}

/// A trading recommendation with target and stop-loss prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: RecommendationAction,
    /// Confidence in the call, 0.0-1.0.
    pub confidence: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    /// Human-readable rationale, one fixed string per rule branch.
    pub reason: String,
    pub is_scalping: bool,
    /// Timestamp of the snapshot that produced this, Unix milliseconds.
    pub timestamp: i64,
}

/// Mutable per-session state owned by the recommendation gate.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub mode: TradingMode,
    pub current_recommendation: Option<Recommendation>,
    /// Price at which the current recommendation was accepted.
    pub last_signal_price: Option<f64>,
}

impl SessionState {
    /// Create a fresh session in the given mode.
    pub fn new(mode: TradingMode) -> Self {
        Self {
            mode,
            current_recommendation: None,
            last_signal_price: None,
        }
    }

    /// Switch trading modes. Returns true if the mode actually changed;
    /// a change clears the recommendation and signal price together.
    pub fn set_mode(&mut self, mode: TradingMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.reset_signals();
        true
    }

    /// Clear the recommendation and signal price as one unit.
    pub fn reset_signals(&mut self) {
        self.current_recommendation = None;
        self.last_signal_price = None;
    }

    /// Presentation view of this session.
    pub fn view(&self) -> SessionView {
        SessionView {
            mode: self.mode,
            last_signal_price: self.last_signal_price,
        }
    }
}

/// Read-only session summary for the presentation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub mode: TradingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signal_price: Option<f64>,
}
