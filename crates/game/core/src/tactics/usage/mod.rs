//! Resolution of tactical acts: range, line of sight, ammunition, to-hit,
//! armour, damage, wear and perk progress.
mod calc;
mod error;
pub mod hit;
mod random;
mod service;

pub use calc::DamageEfficientCalc;
pub use error::UsageError;
pub use random::{DiceRandomSource, TacticalActUsageRandomSource};
pub use service::{ActOutcome, ActReport, TacticalActUsageService, UsageReport, UsedTacticalActs};
