use cs_core::{CsError, StrategyId, SubjectId};
use cs_movement::MovementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CsError),

    #[error("subject {subject} has radius 0; radius must be positive")]
    InvalidRadius { subject: SubjectId },

    #[error("subject {subject} uses {strategy}, which is not in the strategy table")]
    UnknownStrategy {
        subject:  SubjectId,
        strategy: StrategyId,
    },

    #[error("movement error: {0}")]
    Movement(#[from] MovementError),
}

pub type SimResult<T> = Result<T, SimError>;
