//! Prop (item) rule table: ammunition, provisions and equipment.

use super::{PersonArmorItem, PersonRuleLevel, SchemeError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropBulletScheme {
    pub caliber: String,
}

/// Survival stat a consume rule acts on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConsumeCommonRuleType {
    Satiety,
    Thirst,
    Health,
    Intoxication,
}

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
pub enum PersonRuleDirection {
    #[default]
    Positive,
    Negative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeCommonRule {
    pub rule_type: ConsumeCommonRuleType,
    pub level: PersonRuleLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: PersonRuleDirection,
}

impl ConsumeCommonRule {
    /// Stat change applied by this rule, `None` for levels without an amount.
    pub const fn amount(&self) -> Option<i32> {
        let base = match self.level {
            PersonRuleLevel::Lesser => 10,
            PersonRuleLevel::Normal => 25,
            PersonRuleLevel::Grand => 50,
            PersonRuleLevel::None | PersonRuleLevel::Absolute => return None,
        };
        Some(match self.rule_type {
            ConsumeCommonRuleType::Health => base / 5,
            _ => base,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropUseScheme {
    /// A consumable prop is removed from the inventory after use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub common_rules: Vec<ConsumeCommonRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropEquipScheme {
    #[cfg_attr(feature = "serde", serde(default))]
    pub armors: Vec<PersonArmorItem>,
    /// Act sids granted while the equipment is worn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub acts: Vec<String>,
    pub durable: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropScheme {
    pub sid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bullet: Option<PropBulletScheme>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_rules: Option<PropUseScheme>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equip: Option<PropEquipScheme>,
}

impl PropScheme {
    pub fn validate(&self) -> Result<(), SchemeError> {
        if let Some(use_rules) = &self.use_rules {
            for rule in &use_rules.common_rules {
                if rule.amount().is_none() {
                    return Err(SchemeError::UnsupportedRuleLevel {
                        sid: self.sid.clone(),
                        level: rule.level,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn caliber(&self) -> Option<&str> {
        self.bullet.as_ref().map(|bullet| bullet.caliber.as_str())
    }

    pub fn has_armor(&self) -> bool {
        self.equip
            .as_ref()
            .is_some_and(|equip| !equip.armors.is_empty())
    }
}
