//! Errors surfaced by the sector runner.

use thiserror::Error;

use tactics_core::{ErrorSeverity, GameError, PersonError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("turn {turn} aborted")]
    Turn {
        turn: u64,
        #[source]
        source: TurnError,
    },

    #[error("cannot place '{person}': {source}")]
    Spawn {
        person: String,
        #[source]
        source: PersonError,
    },

    #[error("no {kind} scheme named '{sid}'")]
    UnknownScheme { kind: &'static str, sid: String },

    #[error("failed to install log subscriber: {0}")]
    Logging(String),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// True for errors that leave the sector unusable.
    pub fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Turn { source, .. } => source.severity(),
            RuntimeError::Spawn { source, .. } => source.severity(),
            RuntimeError::UnknownScheme { .. } => ErrorSeverity::Fatal,
            RuntimeError::Logging(_) => ErrorSeverity::Internal,
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Turn { source, .. } => source.error_code(),
            RuntimeError::Spawn { source, .. } => source.error_code(),
            RuntimeError::UnknownScheme { .. } => "RUNTIME_UNKNOWN_SCHEME",
            RuntimeError::Logging(_) => "RUNTIME_LOGGING",
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
