use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("a strategy with id '{0}' is already registered")]
    DuplicateId(String),

    #[error("strategy definition is incomplete: {0}")]
    IncompleteDefinition(String),
}
