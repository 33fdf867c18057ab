use crate::behaviour::TaskError;
use crate::error::{ErrorSeverity, GameError};
use crate::tactics::ActorId;

/// Stage of a sector turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    CollectTasks,
    ValidateTasks,
    ExecuteTasks,
    Upkeep,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::CollectTasks => "collect_tasks",
            TurnPhase::ValidateTasks => "validate_tasks",
            TurnPhase::ExecuteTasks => "execute_tasks",
            TurnPhase::Upkeep => "upkeep",
        }
    }
}

/// Broken turn invariants. Every variant aborts the turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("task '{task}' of {actor} was submitted already complete")]
    CompletedTask { actor: ActorId, task: &'static str },

    #[error("task '{task}' refers to {actor}, which is not in the sector")]
    MissingActor { actor: ActorId, task: &'static str },

    #[error("task '{task}' was assigned to dead {actor}")]
    DeadActor { actor: ActorId, task: &'static str },

    #[error("task '{task}' of {actor} aborted the turn: {source}")]
    Aborted {
        actor: ActorId,
        task: &'static str,
        #[source]
        source: TaskError,
    },
}

impl TurnError {
    /// Phase in which the error was detected.
    pub fn phase(&self) -> TurnPhase {
        match self {
            TurnError::CompletedTask { .. }
            | TurnError::MissingActor { .. }
            | TurnError::DeadActor { .. } => TurnPhase::ValidateTasks,
            TurnError::Aborted { .. } => TurnPhase::ExecuteTasks,
        }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::CompletedTask { .. } => "TURN_COMPLETED_TASK",
            TurnError::MissingActor { .. } => "TURN_MISSING_ACTOR",
            TurnError::DeadActor { .. } => "TURN_DEAD_ACTOR",
            TurnError::Aborted { .. } => "TURN_ABORTED",
        }
    }
}
