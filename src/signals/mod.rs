//! Signal-derivation core.
//!
//! Technical indicator calculators, the two rule-based classifiers, and
//! the recommendation gate that rate-limits signal churn.

pub mod gate;
pub mod indicators;
pub mod scalping;
pub mod snapshot;
pub mod standard;

pub use gate::GateDecision;
pub use scalping::classify_scalping;
pub use snapshot::build_snapshot;
pub use standard::classify_standard;
