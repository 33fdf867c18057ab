//! Tactical act rule table.

use bitflags::bitflags;

use super::{ActRange, ImpactType, OffenseType, Roll, SchemeError};

bitflags! {
    /// Who an act may be aimed at.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TacticalActTargets: u8 {
        const SELF  = 1 << 0;
        const ENEMY = 1 << 1;
        const ALLY  = 1 << 2;
    }
}

/// What an act does to an actor it resolves against.
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
pub enum TacticalActEffectType {
    /// Placeholder of incomplete rule data. Never resolvable.
    #[default]
    Undefined,
    Damage,
    Heal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalActOffence {
    pub offence_type: OffenseType,
    pub impact: ImpactType,
    pub ap_rank: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalActStats {
    pub targets: TacticalActTargets,
    pub effect: TacticalActEffectType,
    pub offence: TacticalActOffence,
    pub range: ActRange,
}

/// Ammunition requirement of an act.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalActConstrains {
    /// Caliber of the resource consumed on use.
    pub prop_resource_type: String,
    pub prop_resource_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalActScheme {
    pub sid: String,
    pub stats: TacticalActStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constrains: Option<TacticalActConstrains>,
    /// Base efficiency (damage or heal amount) roll.
    pub efficient: Roll,
    /// To-hit roll compared against the target's defence threshold.
    #[cfg_attr(feature = "serde", serde(default = "Roll::d6"))]
    pub to_hit: Roll,
}

impl TacticalActScheme {
    /// Structural checks performed when the scheme enters a catalog.
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.stats.effect == TacticalActEffectType::Undefined {
            return Err(SchemeError::UndefinedEffect {
                sid: self.sid.clone(),
            });
        }
        if self.stats.range.is_empty() {
            return Err(SchemeError::EmptyRange {
                sid: self.sid.clone(),
                min: self.stats.range.min,
                max: self.stats.range.max,
            });
        }
        if !self.efficient.is_valid() || !self.to_hit.is_valid() {
            return Err(SchemeError::InvalidRoll {
                sid: self.sid.clone(),
            });
        }
        if let Some(constrains) = &self.constrains
            && constrains.prop_resource_count == 0
        {
            return Err(SchemeError::InvalidRoll {
                sid: self.sid.clone(),
            });
        }
        Ok(())
    }

    pub fn allows_self(&self) -> bool {
        self.stats.targets.contains(TacticalActTargets::SELF)
    }
}
