//! Persons: the character sheets behind actors.
//!
//! A [`Person`] aggregates survival stats, evolution (skills and perks),
//! combat stats, inventory, worn equipment and the tactical acts those grant.
//! All of it is mutated only through the operations defined here.
mod acts;
mod equipment;
mod error;
mod evolution;
mod inventory;
mod perk_resolver;
mod person;
mod survival;

pub use acts::{TacticalAct, TacticalActCarrier};
pub use equipment::{Equipment, EquipmentCarrier};
pub use error::PersonError;
pub use evolution::{
    EvolutionData, Perk, PerkEvent, PerkJob, PerkLevel, SkillStat, SkillStatType,
};
pub use inventory::{Inventory, Prop, Resource};
pub use perk_resolver::{JobPerkResolver, JobProgress, PerkResolver};
pub use person::{CombatStats, Person, PropUsage};
pub use survival::{
    HazardLevel, KeyPoint, SurvivalData, SurvivalEvent, SurvivalStat, SurvivalStatType,
};

pub use crate::schemes::PersonKind;
