//! Deterministic tactical rules of a turn-based roguelike.
//!
//! `tactics-core` owns everything that happens inside a sector: the hex map
//! and pathfinding, persons with survival needs and perks, tactical acts and
//! their resolution, actor tasks, and the turn loop that runs them. It does
//! no I/O; rule tables come in through [`env::SchemeOracle`] and every random
//! decision goes through a pluggable source.
pub mod behaviour;
pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod map;
pub mod pathfinding;
pub mod persons;
pub mod schemes;
pub mod sector;
pub mod tactics;

#[cfg(test)]
pub(crate) mod test_utils;

pub use behaviour::{
    ActorTask, ActorTaskSource, AttackTask, HumanTaskSource, MoveTask, TaskError, TaskState,
    UsePropTask,
};
pub use config::GameConfig;
pub use env::{Dice, PcgDice, SchemeCatalog, SchemeKind, SchemeOracle, get_scheme};
pub use error::{ErrorSeverity, GameError};
pub use events::{EventHub, SubscriptionId};
pub use map::{CubeCoords, HexMap, HexNode, MapError, NodeId, OffsetCoords};
pub use pathfinding::{AStar, AStarState, find_path};
pub use persons::{
    EvolutionData, JobPerkResolver, JobProgress, PerkResolver, Person, PersonError, SurvivalData,
    SurvivalEvent, SurvivalStatType, TacticalAct,
};
pub use sector::{
    Sector, SectorState, TaskOutcome, TaskReport, TurnError, TurnPhase, TurnReport,
};
pub use tactics::{
    ActOutcome, Actor, ActorEvent, ActorId, ActorInteractionBus, ActorInteractionEvent,
    ActorManager, AttackTarget, ContainerId, ContainerManager, DamageEfficientCalc,
    DiceRandomSource, EquipmentDurableService, InteractionEventBus, PlayerId, PropContainer,
    TacticalActUsageRandomSource, TacticalActUsageService, UsageError, UsageReport,
    UsedTacticalActs, WearDurableService,
};
