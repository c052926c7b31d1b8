//! Short-horizon ("scalping") signal classifier.
//!
//! EMA cross + Bollinger band geometry + volume, with tighter targets
//! than the standard rule set. Branch order is load-bearing.

use crate::error::{Result, SignalError};
use crate::types::{IndicatorSnapshot, Recommendation, RecommendationAction};

/// Scalping targets 0.8% with a 0.5% stop.
const BUY_TARGET_MULTIPLIER: f64 = 1.008;
const BUY_STOP_MULTIPLIER: f64 = 0.995;
const SELL_TARGET_MULTIPLIER: f64 = 0.992;
const SELL_STOP_MULTIPLIER: f64 = 1.005;

/// Band width below 2% of the middle band counts as a squeeze.
const SQUEEZE_RATIO: f64 = 0.02;
/// "Near band" means within the outer 20% of the band half.
const BAND_PROXIMITY: f64 = 0.2;
/// Volume above 1.5x the batch average counts as high.
const HIGH_VOLUME_RATIO: f64 = 1.5;

const REASON_SCALP_BUY: &str =
    "Scalp buy: EMA crossover with price near the lower band on high volume";
const REASON_SCALP_SELL: &str =
    "Scalp sell: bearish EMA with price near the upper band on high volume";
const REASON_SQUEEZE: &str = "Possible breakout ahead: Bollinger band squeeze detected";
const REASON_NO_SETUP: &str = "No clear scalping setup";

/// Classify a snapshot under the scalping rule set.
///
/// Requires `ema9`, `ema20`, and `bollinger` to be present; fails with
/// [`SignalError::MissingField`] otherwise.
pub fn classify_scalping(snapshot: &IndicatorSnapshot) -> Result<Recommendation> {
    let ema9 = snapshot.ema9.ok_or(SignalError::MissingField("ema9"))?;
    let ema20 = snapshot.ema20.ok_or(SignalError::MissingField("ema20"))?;
    let bands = snapshot
        .bollinger
        .ok_or(SignalError::MissingField("bollinger"))?;

    let ema_crossover = ema9 > ema20;
    let bands_squeeze = (bands.upper - bands.lower) / bands.middle < SQUEEZE_RATIO;
    let price_near_upper =
        snapshot.price > bands.upper - (bands.upper - bands.middle) * BAND_PROXIMITY;
    let price_near_lower =
        snapshot.price < bands.lower + (bands.middle - bands.lower) * BAND_PROXIMITY;
    let high_volume = snapshot.volume > snapshot.average_volume * HIGH_VOLUME_RATIO;

    let (action, confidence, reason) = if ema_crossover && price_near_lower && high_volume {
        (RecommendationAction::Buy, 0.8, REASON_SCALP_BUY)
    } else if !ema_crossover && price_near_upper && high_volume {
        (RecommendationAction::Sell, 0.8, REASON_SCALP_SELL)
    } else if bands_squeeze {
        (RecommendationAction::Hold, 0.7, REASON_SQUEEZE)
    } else {
        (RecommendationAction::Hold, 0.5, REASON_NO_SETUP)
    };

    let (target_multiplier, stop_multiplier) = if action == RecommendationAction::Buy {
        (BUY_TARGET_MULTIPLIER, BUY_STOP_MULTIPLIER)
    } else {
        (SELL_TARGET_MULTIPLIER, SELL_STOP_MULTIPLIER)
    };

    Ok(Recommendation {
        action,
        confidence,
        target_price: snapshot.price * target_multiplier,
        stop_loss: snapshot.price * stop_multiplier,
        reason: reason.to_string(),
        is_scalping: true,
        timestamp: snapshot.timestamp,
    })
}
