//! Actors on the map and everything that happens when they fight.
mod actor;
mod durability;
mod ids;
mod interaction;
mod registry;
pub mod usage;

pub use actor::{Actor, ActorEvent};
pub use durability::{EquipmentDurableService, WearDurableService};
pub use ids::{ActorId, AttackTarget, ContainerId, PlayerId};
pub use interaction::{ActorInteractionBus, ActorInteractionEvent, InteractionEventBus};
pub use registry::{ActorManager, ContainerManager, PropContainer, RegistryEvent};
pub use usage::{
    ActOutcome, ActReport, DamageEfficientCalc, DiceRandomSource, TacticalActUsageRandomSource,
    TacticalActUsageService, UsageError, UsageReport, UsedTacticalActs,
};
