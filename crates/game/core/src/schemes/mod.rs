//! Rule tables ("schemes") describing acts, perks, props and persons.
//!
//! Schemes are immutable data identified by a string sid. Optional parts are
//! explicit `Option`s and every scheme is validated before it can be looked
//! up, see [`crate::env::SchemeCatalog`].
mod act;
mod combat;
mod common;
mod error;
mod perk;
mod person;
mod prop;

pub use act::{
    TacticalActConstrains, TacticalActEffectType, TacticalActOffence, TacticalActScheme,
    TacticalActStats, TacticalActTargets,
};
pub use combat::{DefenceType, ImpactType, OffenseType, PersonArmorItem, PersonDefenceItem};
pub use common::{ActRange, PersonRuleLevel, Roll};
pub use error::SchemeError;
pub use perk::{JobScheme, JobType, PerkLevelScheme, PerkScheme};
pub use person::{PersonKind, PersonScheme};
pub use prop::{
    ConsumeCommonRule, ConsumeCommonRuleType, PersonRuleDirection, PropBulletScheme,
    PropEquipScheme, PropScheme, PropUseScheme,
};
