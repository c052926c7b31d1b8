//! Standard-horizon signal classifier.
//!
//! MACD + RSI decision table, evaluated top to bottom with the first
//! match winning. Branch order is load-bearing: the conditions are not
//! mutually exclusive.

use crate::types::{IndicatorSnapshot, Recommendation, RecommendationAction};

/// Target sits 2.5% from the current price, stop 1.5%.
const BUY_TARGET_MULTIPLIER: f64 = 1.025;
const BUY_STOP_MULTIPLIER: f64 = 0.985;
const SELL_TARGET_MULTIPLIER: f64 = 0.975;
const SELL_STOP_MULTIPLIER: f64 = 1.015;

const REASON_STRONG_BUY: &str = "Strong buy signal: MACD crossover with oversold RSI";
const REASON_STRONG_SELL: &str = "Strong sell signal: bearish MACD with overbought RSI";
const REASON_MODERATE_BUY: &str = "Moderate buy signal: MACD crossover with neutral RSI";
const REASON_MODERATE_SELL: &str = "Moderate sell signal: bearish MACD with neutral RSI";
const REASON_NO_SIGNAL: &str = "No clear signal: waiting for better conditions";

/// Classify a snapshot under the standard (non-scalping) rule set.
///
/// Total function: exactly one branch fires for any snapshot.
pub fn classify_standard(snapshot: &IndicatorSnapshot) -> Recommendation {
    let macd_crossover = snapshot.macd.macd > snapshot.macd.signal;
    let oversold = snapshot.rsi < 30.0;
    let overbought = snapshot.rsi > 70.0;
    let neutral_rsi = snapshot.rsi > 40.0 && snapshot.rsi < 60.0;

    let (action, confidence, reason) = if macd_crossover && oversold {
        (RecommendationAction::Buy, 0.8, REASON_STRONG_BUY)
    } else if !macd_crossover && overbought {
        (RecommendationAction::Sell, 0.8, REASON_STRONG_SELL)
    } else if macd_crossover && neutral_rsi {
        (RecommendationAction::Buy, 0.6, REASON_MODERATE_BUY)
    } else if !macd_crossover && neutral_rsi {
        (RecommendationAction::Sell, 0.6, REASON_MODERATE_SELL)
    } else {
        (RecommendationAction::Hold, 0.5, REASON_NO_SIGNAL)
    };

    // Target/stop depend on the action alone; HOLD shares the sell-side
    // multipliers
    let (target_multiplier, stop_multiplier) = if action == RecommendationAction::Buy {
        (BUY_TARGET_MULTIPLIER, BUY_STOP_MULTIPLIER)
    } else {
        (SELL_TARGET_MULTIPLIER, SELL_STOP_MULTIPLIER)
    };

    Recommendation {
        action,
        confidence,
        target_price: snapshot.price * target_multiplier,
        stop_loss: snapshot.price * stop_multiplier,
        reason: reason.to_string(),
        is_scalping: false,
        timestamp: snapshot.timestamp,
    }
}
