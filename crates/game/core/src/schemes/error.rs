use crate::error::{ErrorSeverity, GameError};

use super::PersonRuleLevel;

/// Rule data that is incomplete or inconsistent.
///
/// Raised when schemes enter a catalog, so broken content is rejected at
/// load time instead of in the middle of a fight.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemeError {
    #[error("scheme '{sid}' is defined twice")]
    DuplicateSid { sid: String },

    #[error("act '{sid}' has an undefined effect")]
    UndefinedEffect { sid: String },

    #[error("act '{sid}' has an empty range [{min}, {max}]")]
    EmptyRange { sid: String, min: u32, max: u32 },

    #[error("scheme '{sid}' has a roll or count of zero")]
    InvalidRoll { sid: String },

    #[error("perk '{sid}' has no levels")]
    PerkWithoutLevels { sid: String },

    #[error("perk '{sid}' level {level} has no jobs")]
    LevelWithoutJobs { sid: String, level: usize },

    #[error("prop '{sid}' uses unsupported rule level {level}")]
    UnsupportedRuleLevel { sid: String, level: PersonRuleLevel },

    #[error("person '{sid}' has non-positive hp {hp}")]
    NonPositiveHp { sid: String, hp: i32 },

    #[error("scheme '{owner}' refers to unknown act '{act}'")]
    UnknownAct { owner: String, act: String },

    #[error("{kind} scheme '{sid}' not found")]
    NotFound { kind: &'static str, sid: String },
}

impl GameError for SchemeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use SchemeError::*;
        match self {
            DuplicateSid { .. } => "SCHEME_DUPLICATE_SID",
            UndefinedEffect { .. } => "SCHEME_UNDEFINED_EFFECT",
            EmptyRange { .. } => "SCHEME_EMPTY_RANGE",
            InvalidRoll { .. } => "SCHEME_INVALID_ROLL",
            PerkWithoutLevels { .. } => "SCHEME_PERK_WITHOUT_LEVELS",
            LevelWithoutJobs { .. } => "SCHEME_LEVEL_WITHOUT_JOBS",
            UnsupportedRuleLevel { .. } => "SCHEME_UNSUPPORTED_RULE_LEVEL",
            NonPositiveHp { .. } => "SCHEME_NON_POSITIVE_HP",
            UnknownAct { .. } => "SCHEME_UNKNOWN_ACT",
            NotFound { .. } => "SCHEME_NOT_FOUND",
        }
    }
}
