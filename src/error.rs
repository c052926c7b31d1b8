use thiserror::Error;

/// Signal core error types.
///
/// Every error is local to one refresh/tick cycle; none are fatal to a
/// session. The policy is "drop this cycle's update, keep prior valid
/// state".
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("insufficient data: need {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("missing snapshot field: {0}")]
    MissingField(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("engine stopped")]
    EngineStopped,
}

pub type Result<T> = std::result::Result<T, SignalError>;
