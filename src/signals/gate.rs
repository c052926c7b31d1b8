//! Recommendation gate.
//!
//! Rate-limits recommendation churn: a new classification runs only after
//! a meaningful price move, and replaces the current call only when the
//! action itself changes, not merely its confidence or price targets.

use tracing::debug;

use crate::error::Result;
use crate::signals::{classify_scalping, classify_standard};
use crate::types::{IndicatorSnapshot, SessionState, TradingMode};

/// Outcome of one gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The candidate replaced the current recommendation.
    Updated,
    /// The current recommendation and signal price stand.
    Unchanged,
}

/// Run one gate cycle against a fresh snapshot.
///
/// On [`GateDecision::Updated`] the session's recommendation and signal
/// price are replaced together; otherwise both are left untouched. A
/// scalping classification error propagates with the state unchanged.
pub fn apply(state: &mut SessionState, snapshot: &IndicatorSnapshot) -> Result<GateDecision> {
    let threshold = state.mode.price_change_threshold();
    let significant_move = match state.last_signal_price {
        Some(last) => ((snapshot.price - last) / last).abs() > threshold,
        None => true,
    };

    if state.current_recommendation.is_some() && !significant_move {
        return Ok(GateDecision::Unchanged);
    }

    let candidate = match state.mode {
        TradingMode::Standard => classify_standard(snapshot),
        TradingMode::Scalping => classify_scalping(snapshot)?,
    };

    let action_changed = state
        .current_recommendation
        .as_ref()
        .map_or(true, |current| candidate.action != current.action);

    if !action_changed {
        return Ok(GateDecision::Unchanged);
    }

    debug!(
        "recommendation updated: {} at {:.4} ({})",
        candidate.action.label(),
        snapshot.price,
        state.mode.name()
    );
    state.last_signal_price = Some(snapshot.price);
    state.current_recommendation = Some(candidate);
    Ok(GateDecision::Updated)
}
