//! Offence, defence and armour descriptors.

use super::PersonRuleLevel;

/// Kind of attack an act performs.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OffenseType {
    #[default]
    Undefined,
    Tactical,
    Fury,
    Shadow,
    Tricky,
    Concentrated,
}

/// Kind of active defence a person has.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DefenceType {
    #[default]
    Undefined,
    TacticalDefence,
    FuryDefence,
    ShadowDefence,
    TrickyDefence,
    ConcentratedDefence,
    /// Counters every offence type.
    DivineDefence,
}

impl DefenceType {
    /// Defence that specifically counters the given offence.
    pub const fn for_offence(offence: OffenseType) -> Self {
        match offence {
            OffenseType::Undefined => Self::Undefined,
            OffenseType::Tactical => Self::TacticalDefence,
            OffenseType::Fury => Self::FuryDefence,
            OffenseType::Shadow => Self::ShadowDefence,
            OffenseType::Tricky => Self::TrickyDefence,
            OffenseType::Concentrated => Self::ConcentratedDefence,
        }
    }

    /// True when this defence may be used against the offence.
    pub fn counters(self, offence: OffenseType) -> bool {
        self == Self::DivineDefence || self == Self::for_offence(offence)
    }
}

/// Physical nature of the damage an act deals. Armour matches on it.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImpactType {
    #[default]
    Kinetic,
    Thermal,
    Acid,
    Psy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonDefenceItem {
    pub defence_type: DefenceType,
    pub level: PersonRuleLevel,
}

impl PersonDefenceItem {
    pub const fn new(defence_type: DefenceType, level: PersonRuleLevel) -> Self {
        Self {
            defence_type,
            level,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonArmorItem {
    pub impact: ImpactType,
    pub armor_rank: i32,
    pub absorption_level: PersonRuleLevel,
}

impl PersonArmorItem {
    pub const fn new(impact: ImpactType, armor_rank: i32, absorption_level: PersonRuleLevel) -> Self {
        Self {
            impact,
            armor_rank,
            absorption_level,
        }
    }
}
