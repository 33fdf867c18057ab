use crate::error::{ErrorSeverity, GameError};
use crate::map::{MapError, NodeId};
use crate::persons::PersonError;
use crate::schemes::TacticalActEffectType;

use super::super::{ActorId, AttackTarget};

/// Why an act could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("act '{act}' cannot target its user")]
    SelfTarget { act: String },

    #[error("act '{act}' reaches {min}..={max}, target is {distance} away")]
    OutOfRange {
        act: String,
        distance: u32,
        min: u32,
        max: u32,
    },

    #[error("no line of sight for act '{act}'")]
    NoLineOfSight { act: String },

    #[error("{0} is not in the sector")]
    ActorNotFound(ActorId),

    #[error("target {0} is not in the sector")]
    TargetNotFound(AttackTarget),

    #[error("node {0:?} is not on the map")]
    NodeNotFound(NodeId),

    #[error("not enough '{resource}': need {required}, have {available}")]
    InsufficientResource {
        resource: String,
        required: u32,
        available: u32,
    },

    #[error("act '{act}' has unsupported effect '{effect}'")]
    UnsupportedEffect {
        act: String,
        effect: TacticalActEffectType,
    },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Person(PersonError),
}

impl From<PersonError> for UsageError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::NotEnough {
                resource,
                required,
                available,
            } => UsageError::InsufficientResource {
                resource,
                required,
                available,
            },
            other => UsageError::Person(other),
        }
    }
}

impl GameError for UsageError {
    fn severity(&self) -> ErrorSeverity {
        use UsageError::*;
        match self {
            SelfTarget { .. }
            | OutOfRange { .. }
            | NoLineOfSight { .. }
            | ActorNotFound(_)
            | TargetNotFound(_)
            | NodeNotFound(_) => ErrorSeverity::Validation,
            InsufficientResource { .. } => ErrorSeverity::Recoverable,
            UnsupportedEffect { .. } => ErrorSeverity::Fatal,
            Map(err) => err.severity(),
            Person(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use UsageError::*;
        match self {
            SelfTarget { .. } => "USAGE_SELF_TARGET",
            OutOfRange { .. } => "USAGE_OUT_OF_RANGE",
            NoLineOfSight { .. } => "USAGE_NO_LINE_OF_SIGHT",
            ActorNotFound(_) => "USAGE_ACTOR_NOT_FOUND",
            TargetNotFound(_) => "USAGE_TARGET_NOT_FOUND",
            NodeNotFound(_) => "USAGE_NODE_NOT_FOUND",
            InsufficientResource { .. } => "USAGE_INSUFFICIENT_RESOURCE",
            UnsupportedEffect { .. } => "USAGE_UNSUPPORTED_EFFECT",
            Map(err) => err.error_code(),
            Person(err) => err.error_code(),
        }
    }
}
