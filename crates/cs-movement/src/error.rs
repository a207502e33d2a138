use cs_core::StrategyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("movement strategy {0} is not registered")]
    UnknownStrategy(StrategyId),

    #[error("strategy table is full ({0} entries)")]
    TableFull(usize),
}

pub type MovementResult<T> = Result<T, MovementError>;
