//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`UsageError`, `TurnError`, `SchemeError`, ...) live
//! next to the operations that raise them. This module only provides the
//! shared classification used by the sector loop to decide whether a failure
//! is reported or aborts the turn.
//!
//! # Classification
//!
//! - **Recoverable**: expected gameplay failures (not enough ammunition)
//! - **Validation**: caller-side misuse (attack out of range, through a wall)
//! - **Internal**: state inconsistencies that indicate a bug
//! - **Fatal**: rule data or turn invariants are broken, the turn must abort

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected gameplay failure, reported upward as a normal outcome.
    ///
    /// Examples: insufficient ammunition, prop not in inventory
    Recoverable,

    /// Invalid command, the caller asked for something impossible.
    ///
    /// Examples: target out of range, no line of sight, self-target
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: actor references a node that is not on the map
    Internal,

    /// Rule data inconsistency or broken turn invariant.
    ///
    /// Examples: unsupported act effect, completed task resubmitted
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error must abort the current turn.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all tactics-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
