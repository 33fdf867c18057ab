//! Behaviour source for computer-controlled sides.
//!
//! Every living actor of the side picks one task per turn:
//!
//! 1. Attack the nearest hostile it can hit right now with a damage act.
//! 2. Otherwise step one cell toward the nearest hostile it can reach.
//! 3. Otherwise stay put.
//!
//! The path is planned again every turn, so a bot never commits to a route
//! that another actor has since blocked.

use std::collections::BTreeSet;

use tactics_core::schemes::{TacticalActEffectType, TacticalActTargets};
use tactics_core::{
    Actor, ActorId, ActorTask, ActorTaskSource, AttackTask, MoveTask, NodeId, PlayerId,
    SectorState, TacticalAct, find_path,
};
use tracing::{debug, trace};

/// Drives every actor owned by one player.
#[derive(Debug, Clone)]
pub struct BotTaskSource {
    owner: PlayerId,
    failed_tasks: u32,
}

impl BotTaskSource {
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            failed_tasks: 0,
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Tasks handed back unsuccessful since the source was created.
    pub fn failed_tasks(&self) -> u32 {
        self.failed_tasks
    }

    fn plan(
        &self,
        state: &SectorState,
        actor: &Actor,
        claimed: &mut BTreeSet<NodeId>,
    ) -> Option<Box<dyn ActorTask>> {
        let hostiles = hostiles_by_distance(state, actor);
        if hostiles.is_empty() {
            trace!(actor = %actor.id(), "no hostiles left");
            return None;
        }

        for &(_, target) in &hostiles {
            if let Some(act) = usable_attack(state, actor, target) {
                debug!(actor = %actor.id(), %target, act = act.sid(), "bot attacks");
                return Some(Box::new(AttackTask::with_act(actor.id(), target, act)));
            }
        }

        for &(distance, target) in &hostiles {
            if distance <= 1 {
                continue;
            }
            let Some(goal) = state.actors.get(target).map(Actor::node) else {
                continue;
            };
            let Some(next) = find_path(&state.map, actor.node(), goal)
                .and_then(|path| path.get(1).copied())
            else {
                continue;
            };
            if next == goal || is_occupied(state, next) || !claimed.insert(next) {
                continue;
            }
            debug!(actor = %actor.id(), %target, ?next, "bot closes in");
            return Some(Box::new(MoveTask::new(actor, next, &state.map)));
        }

        trace!(actor = %actor.id(), "bot waits");
        None
    }
}

impl ActorTaskSource for BotTaskSource {
    fn get_actor_tasks(&mut self, state: &SectorState) -> Vec<Box<dyn ActorTask>> {
        let mut claimed = BTreeSet::new();
        let mut actors: Vec<&Actor> = state
            .actors
            .owned_by(self.owner)
            .filter(|actor| !actor.is_dead())
            .collect();
        actors.sort_by_key(|actor| actor.id());

        actors
            .into_iter()
            .filter_map(|actor| self.plan(state, actor, &mut claimed))
            .collect()
    }

    fn task_executed(&mut self, task: Box<dyn ActorTask>, succeeded: bool) {
        if !succeeded {
            self.failed_tasks += 1;
            trace!(actor = %task.actor(), task = task.name(), "bot task did not succeed");
        }
    }
}

/// Living hostile actors ordered by distance, then id.
fn hostiles_by_distance(state: &SectorState, actor: &Actor) -> Vec<(u32, ActorId)> {
    let mut hostiles: Vec<(u32, ActorId)> = state
        .actors
        .iter()
        .filter(|other| !other.is_dead() && actor.is_hostile_to(other))
        .filter_map(|other| {
            let distance = state.map.distance(actor.node(), other.node()).ok()?;
            Some((distance, other.id()))
        })
        .collect();
    hostiles.sort_unstable();
    hostiles
}

/// First damage act of `actor` that can reach `target` with the ammunition
/// it carries.
fn usable_attack(state: &SectorState, actor: &Actor, target: ActorId) -> Option<TacticalAct> {
    let target_node = state.actors.get(target)?.node();
    let from = state.map.node(actor.node())?.cube;
    let to = state.map.node(target_node)?.cube;
    if !state
        .map
        .target_is_on_line(actor.node(), target_node)
        .unwrap_or(false)
    {
        return None;
    }

    let inventory = actor.person().inventory();
    actor
        .person()
        .acts()
        .acts()
        .iter()
        .filter(|act| act.stats().effect == TacticalActEffectType::Damage)
        .filter(|act| act.stats().targets.contains(TacticalActTargets::ENEMY))
        .filter(|act| act.check_distance(from, to))
        .find(|act| {
            act.constrains().is_none_or(|constrains| {
                inventory.caliber_count(&constrains.prop_resource_type)
                    >= constrains.prop_resource_count
            })
        })
        .cloned()
}

fn is_occupied(state: &SectorState, node: NodeId) -> bool {
    state
        .actors
        .iter()
        .any(|actor| actor.node() == node && !actor.is_dead())
}

#[cfg(test)]
mod tests {
    use tactics_core::schemes::{
        ActRange, ImpactType, OffenseType, PersonKind, PersonScheme, Roll, TacticalActOffence,
        TacticalActScheme, TacticalActStats,
    };
    use tactics_core::{HexMap, OffsetCoords, Person, SchemeCatalog, SchemeOracle};

    use super::*;

    fn catalog() -> SchemeCatalog {
        let mut catalog = SchemeCatalog::new();
        catalog
            .insert_act(TacticalActScheme {
                sid: "bite".into(),
                stats: TacticalActStats {
                    targets: TacticalActTargets::ENEMY,
                    effect: TacticalActEffectType::Damage,
                    offence: TacticalActOffence {
                        offence_type: OffenseType::Tactical,
                        impact: ImpactType::Kinetic,
                        ap_rank: 1,
                    },
                    range: ActRange::melee(),
                },
                constrains: None,
                efficient: Roll::new(6, 1),
                to_hit: Roll::d6(),
            })
            .unwrap();
        for (sid, kind) in [("rat", PersonKind::Monster), ("hunter", PersonKind::Human)] {
            catalog
                .insert_person(PersonScheme {
                    sid: sid.into(),
                    kind,
                    hp: 5,
                    defences: Vec::new(),
                    armors: Vec::new(),
                    acts: vec!["bite".into()],
                    equipment_slots: 0,
                })
                .unwrap();
        }
        catalog
    }

    fn place(state: &mut SectorState, sid: &str, owner: PlayerId, x: i32, y: i32) -> ActorId {
        let catalog = catalog();
        let person = Person::from_scheme(&catalog.person(sid).unwrap(), &catalog).unwrap();
        let node = state.map.node_at(OffsetCoords::new(x, y)).unwrap();
        state.actors.spawn(person, owner, node)
    }

    #[test]
    fn adjacent_hostile_is_attacked() {
        let mut state = SectorState::new(HexMap::grid(5, 3));
        let rat = place(&mut state, "rat", PlayerId::MONSTERS, 1, 1);
        place(&mut state, "hunter", PlayerId::HUMAN, 2, 1);
        let mut bot = BotTaskSource::new(PlayerId::MONSTERS);

        let tasks = bot.get_actor_tasks(&state);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].actor(), rat);
        assert_eq!(tasks[0].name(), "attack");
    }

    #[test]
    fn distant_hostile_is_approached_one_step() {
        let mut state = SectorState::new(HexMap::grid(6, 1));
        place(&mut state, "rat", PlayerId::MONSTERS, 0, 0);
        place(&mut state, "hunter", PlayerId::HUMAN, 4, 0);
        let mut bot = BotTaskSource::new(PlayerId::MONSTERS);

        let tasks = bot.get_actor_tasks(&state);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name(), "move");
    }

    #[test]
    fn blocked_corridor_means_waiting() {
        let mut state = SectorState::new(HexMap::grid(6, 1));
        place(&mut state, "rat", PlayerId::MONSTERS, 0, 0);
        place(&mut state, "rat", PlayerId::MONSTERS, 1, 0);
        place(&mut state, "hunter", PlayerId::HUMAN, 4, 0);
        let mut bot = BotTaskSource::new(PlayerId::MONSTERS);

        let tasks = bot.get_actor_tasks(&state);

        // Only the front rat can advance; the one behind it has no free cell.
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].actor(), ActorId(1));
    }

    #[test]
    fn side_without_enemies_stays_idle() {
        let mut state = SectorState::new(HexMap::grid(4, 4));
        place(&mut state, "rat", PlayerId::MONSTERS, 0, 0);
        let mut bot = BotTaskSource::new(PlayerId::MONSTERS);

        assert!(bot.get_actor_tasks(&state).is_empty());
    }

    #[test]
    fn unsuccessful_tasks_are_counted() {
        let mut state = SectorState::new(HexMap::grid(5, 3));
        let rat = place(&mut state, "rat", PlayerId::MONSTERS, 1, 1);
        let hunter = place(&mut state, "hunter", PlayerId::HUMAN, 2, 1);
        let act = state.actors.get(rat).unwrap().person().acts().acts()[0].clone();
        let mut bot = BotTaskSource::new(PlayerId::MONSTERS);

        bot.task_executed(Box::new(AttackTask::with_act(rat, hunter, act)), false);

        assert_eq!(bot.failed_tasks(), 1);
    }
}
