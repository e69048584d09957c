use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// Parameter validation failed; the payload is the full list of
    /// human-readable problems, suitable for returning to the caller as-is.
    #[error("invalid strategy parameters: {}", .0.join("; "))]
    InvalidParameters(Vec<String>),

    #[error(transparent)]
    Registration(#[from] StrategyError),
}
