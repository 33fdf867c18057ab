//! Person templates used to spawn actors.

use super::{PersonArmorItem, PersonDefenceItem, SchemeError};

/// Whether a person can evolve.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PersonKind {
    /// Player-like person with perks, equipment and survival needs.
    #[default]
    Human,
    /// Monsters never gain perk progress.
    Monster,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonScheme {
    pub sid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: PersonKind,
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defences: Vec<PersonDefenceItem>,
    /// Innate armour (hide, carapace), checked before worn equipment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub armors: Vec<PersonArmorItem>,
    /// Act sids available without any equipment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub acts: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "PersonScheme::default_slots"))]
    pub equipment_slots: usize,
}

impl PersonScheme {
    pub const DEFAULT_SLOTS: usize = 3;

    fn default_slots() -> usize {
        Self::DEFAULT_SLOTS
    }

    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.hp <= 0 {
            return Err(SchemeError::NonPositiveHp {
                sid: self.sid.clone(),
                hp: self.hp,
            });
        }
        Ok(())
    }
}
