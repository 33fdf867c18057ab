use core::fmt;

use crate::error::{ErrorSeverity, GameError};
use crate::persons::PersonError;
use crate::sector::SectorState;
use crate::tactics::{ActorId, TacticalActUsageService, UsageError};

/// Progress of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TaskState {
    /// Created, not executed yet.
    Pending,
    /// Executed at least once and has more to do.
    Executing,
    Complete,
    /// Cannot make progress, e.g. a move with no path. Executing it is a no-op.
    Stalled,
}

/// One unit of intent of an actor.
pub trait ActorTask: fmt::Debug {
    fn actor(&self) -> ActorId;

    fn state(&self) -> TaskState;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    fn is_complete(&self) -> bool {
        self.state() == TaskState::Complete
    }

    fn is_stalled(&self) -> bool {
        self.state() == TaskState::Stalled
    }

    fn execute(
        &mut self,
        state: &mut SectorState,
        usage: &mut TacticalActUsageService,
    ) -> Result<(), TaskError>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("{0} is not in the sector")]
    ActorNotFound(ActorId),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Person(#[from] PersonError),
}

impl GameError for TaskError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TaskError::ActorNotFound(_) => ErrorSeverity::Internal,
            TaskError::Usage(err) => err.severity(),
            TaskError::Person(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TaskError::ActorNotFound(_) => "TASK_ACTOR_NOT_FOUND",
            TaskError::Usage(err) => err.error_code(),
            TaskError::Person(err) => err.error_code(),
        }
    }
}
