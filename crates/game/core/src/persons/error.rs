use crate::error::{ErrorSeverity, GameError};
use crate::schemes::SchemeError;

/// Failures of person-level operations: inventory, equipment, perks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PersonError {
    #[error("not enough '{resource}': need {required}, have {available}")]
    NotEnough {
        resource: String,
        required: u32,
        available: u32,
    },

    #[error("prop '{sid}' is not in the inventory")]
    PropNotFound { sid: String },

    #[error("prop '{sid}' cannot be used")]
    NotUsable { sid: String },

    #[error("prop '{sid}' cannot be equipped")]
    NotEquippable { sid: String },

    #[error("slot {slot} is out of range ({slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("perk '{sid}' is not known")]
    UnknownPerk { sid: String },

    #[error("perk '{sid}' is already at its last level")]
    PerkMaxed { sid: String },

    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

impl GameError for PersonError {
    fn severity(&self) -> ErrorSeverity {
        use PersonError::*;
        match self {
            NotEnough { .. } => ErrorSeverity::Recoverable,
            PropNotFound { .. }
            | NotUsable { .. }
            | NotEquippable { .. }
            | SlotOutOfRange { .. }
            | UnknownPerk { .. }
            | PerkMaxed { .. } => ErrorSeverity::Validation,
            Scheme(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use PersonError::*;
        match self {
            NotEnough { .. } => "PERSON_NOT_ENOUGH",
            PropNotFound { .. } => "PERSON_PROP_NOT_FOUND",
            NotUsable { .. } => "PERSON_NOT_USABLE",
            NotEquippable { .. } => "PERSON_NOT_EQUIPPABLE",
            SlotOutOfRange { .. } => "PERSON_SLOT_OUT_OF_RANGE",
            UnknownPerk { .. } => "PERSON_UNKNOWN_PERK",
            PerkMaxed { .. } => "PERSON_PERK_MAXED",
            Scheme(err) => err.error_code(),
        }
    }
}
