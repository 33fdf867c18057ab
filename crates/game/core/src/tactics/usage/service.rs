use core::fmt;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::map::NodeId;
use crate::persons::{JobProgress, PerkResolver, Person, SurvivalStatType, TacticalAct};
use crate::schemes::{PersonDefenceItem, TacticalActEffectType};
use crate::sector::SectorState;

use super::super::{
    Actor, ActorId, ActorInteractionBus, ActorInteractionEvent, AttackTarget,
    EquipmentDurableService,
};
use super::{DamageEfficientCalc, TacticalActUsageRandomSource, UsageError, hit};

/// Acts fired by one attack command.
///
/// Primary acts always fire. Each secondary act fires only on a successful
/// secondary roll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedTacticalActs {
    pub primary: Vec<TacticalAct>,
    pub secondary: Vec<TacticalAct>,
}

impl UsedTacticalActs {
    pub fn primary(act: TacticalAct) -> Self {
        Self {
            primary: vec![act],
            secondary: Vec::new(),
        }
    }

    pub fn with_secondary(mut self, act: TacticalAct) -> Self {
        self.secondary.push(act);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActOutcome {
    Hit {
        calc: DamageEfficientCalc,
        success_to_hit: i32,
        fact_to_hit: i32,
    },
    Dodged {
        defence: PersonDefenceItem,
        success_to_hit: i32,
        fact_to_hit: i32,
    },
    Missed {
        success_to_hit: i32,
        fact_to_hit: i32,
    },
    Healed {
        amount: i32,
    },
    ContainerDamaged {
        amount: i32,
    },
    /// Secondary act whose roll failed.
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActReport {
    pub act: String,
    pub outcome: ActOutcome,
    /// The target went from alive to dead because of this act.
    pub target_killed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageReport {
    pub actor: ActorId,
    pub target: AttackTarget,
    pub acts: Vec<ActReport>,
}

impl UsageReport {
    fn new(actor: ActorId, target: AttackTarget) -> Self {
        Self {
            actor,
            target,
            acts: Vec::new(),
        }
    }

    pub fn target_killed(&self) -> bool {
        self.acts.iter().any(|act| act.target_killed)
    }

    /// Total damage dealt to an actor target.
    pub fn damage_dealt(&self) -> i32 {
        self.acts
            .iter()
            .map(|act| match &act.outcome {
                ActOutcome::Hit { calc, .. } => calc.result_efficient(),
                _ => 0,
            })
            .sum()
    }
}

/// Resolves tactical acts against actors and containers.
pub struct TacticalActUsageService {
    random: Box<dyn TacticalActUsageRandomSource>,
    perk_resolver: Arc<dyn PerkResolver>,
    config: GameConfig,
    durable_service: Option<Box<dyn EquipmentDurableService>>,
    interaction_bus: Option<Box<dyn ActorInteractionBus>>,
}

impl TacticalActUsageService {
    pub fn new(
        random: Box<dyn TacticalActUsageRandomSource>,
        perk_resolver: Arc<dyn PerkResolver>,
        config: GameConfig,
    ) -> Self {
        Self {
            random,
            perk_resolver,
            config,
            durable_service: None,
            interaction_bus: None,
        }
    }

    /// Enables weapon and armour wear.
    pub fn with_durable_service(mut self, service: Box<dyn EquipmentDurableService>) -> Self {
        self.durable_service = Some(service);
        self
    }

    pub fn with_interaction_bus(mut self, bus: Box<dyn ActorInteractionBus>) -> Self {
        self.interaction_bus = Some(bus);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn perk_resolver(&self) -> &Arc<dyn PerkResolver> {
        &self.perk_resolver
    }

    /// Fires every act of a command at one target.
    ///
    /// Self-targeting is checked for all primary acts before anything
    /// happens. Any later error stops the command, leaving the effects of
    /// acts already resolved in place.
    pub fn use_on(
        &mut self,
        state: &mut SectorState,
        actor: ActorId,
        target: AttackTarget,
        acts: &UsedTacticalActs,
    ) -> Result<UsageReport, UsageError> {
        let span = tracing::debug_span!("use_acts", %actor, %target);
        let _guard = span.enter();

        if target == AttackTarget::Actor(actor)
            && let Some(act) = acts.primary.iter().find(|act| !act.scheme().allows_self())
        {
            return Err(UsageError::SelfTarget {
                act: act.sid().to_owned(),
            });
        }

        let mut report = UsageReport::new(actor, target);
        for act in &acts.primary {
            report.acts.push(self.use_act(state, actor, target, act)?);
        }

        for act in &acts.secondary {
            let roll = self.random.roll_use_secondary_act();
            if roll < self.config.secondary_act_threshold {
                tracing::trace!(act = act.sid(), roll, "secondary act skipped");
                report.acts.push(ActReport {
                    act: act.sid().to_owned(),
                    outcome: ActOutcome::Skipped,
                    target_killed: false,
                });
                continue;
            }
            report.acts.push(self.use_act(state, actor, target, act)?);
        }

        Ok(report)
    }

    fn use_act(
        &mut self,
        state: &mut SectorState,
        actor_id: ActorId,
        target: AttackTarget,
        act: &TacticalAct,
    ) -> Result<ActReport, UsageError> {
        let from = state
            .actors
            .get(actor_id)
            .ok_or(UsageError::ActorNotFound(actor_id))?
            .node();
        let to = target_node(state, target)?;

        let targets_self = target == AttackTarget::Actor(actor_id);
        if !(targets_self && act.scheme().allows_self()) {
            check_reach(state, from, to, act)?;
        }

        let effect = act.stats().effect;
        if matches!(target, AttackTarget::Actor(_)) && effect == TacticalActEffectType::Undefined {
            return Err(unsupported(act));
        }

        let attacker = state
            .actors
            .get_mut(actor_id)
            .ok_or(UsageError::ActorNotFound(actor_id))?;
        if let Some(constrains) = act.constrains() {
            attacker.person_mut().inventory_mut().take_caliber(
                &constrains.prop_resource_type,
                constrains.prop_resource_count,
            )?;
        }
        attacker.use_act(target, act);

        let efficient = self.random.roll_efficient(&act.scheme().efficient);

        let (outcome, target_killed) = match target {
            AttackTarget::Container(id) => {
                let container = state
                    .containers
                    .get_mut(id)
                    .ok_or(UsageError::TargetNotFound(target))?;
                container.take_damage(efficient);
                (ActOutcome::ContainerDamaged { amount: efficient }, false)
            }
            AttackTarget::Actor(target_id) => match effect {
                TacticalActEffectType::Damage => {
                    self.damage_actor(state, actor_id, target_id, act, efficient)?
                }
                TacticalActEffectType::Heal => {
                    heal_actor(state, target_id, efficient)?;
                    (ActOutcome::Healed { amount: efficient }, false)
                }
                TacticalActEffectType::Undefined => return Err(unsupported(act)),
            },
        };

        self.wear_weapon(state, actor_id, act);

        Ok(ActReport {
            act: act.sid().to_owned(),
            outcome,
            target_killed,
        })
    }

    fn damage_actor(
        &mut self,
        state: &mut SectorState,
        attacker_id: ActorId,
        target_id: ActorId,
        act: &TacticalAct,
        efficient: i32,
    ) -> Result<(ActOutcome, bool), UsageError> {
        let not_found = UsageError::TargetNotFound(AttackTarget::Actor(target_id));
        let target = state.actors.get(target_id).ok_or(not_found.clone())?;
        let was_dead = target.is_dead();

        let offence = act.stats().offence;
        let defence = hit::preferred_defence(
            &target.person().combat_stats().defences,
            offence.offence_type,
        );
        let success_to_hit = hit::success_to_hit(self.config.base_to_hit, defence.as_ref());
        let fact_to_hit = self.random.roll_to_hit(&act.scheme().to_hit);
        tracing::debug!(act = act.sid(), success_to_hit, fact_to_hit, "to-hit roll");

        if fact_to_hit < success_to_hit {
            let outcome = self.report_miss(
                attacker_id,
                target_id,
                defence,
                success_to_hit,
                fact_to_hit,
            );
            return Ok((outcome, false));
        }

        let calc = self.calc_efficient(target.person(), act, efficient);
        self.push_event(ActorInteractionEvent::SuccessfulAttack {
            attacker: attacker_id,
            target: target_id,
            calc,
            success_to_hit,
            fact_to_hit,
        });

        let damage = calc.result_efficient();
        let mut killed = false;
        if damage > 0 {
            let target = state.actors.get_mut(target_id).ok_or(not_found)?;
            target.take_damage(damage);
            killed = !was_dead && target.is_dead();
            self.wear_armor(target);

            self.count_progress(state, attacker_id, JobProgress::AttackActor);
            if killed {
                tracing::debug!(attacker = %attacker_id, target = %target_id, "target defeated");
                self.count_progress(state, attacker_id, JobProgress::DefeatActor);
            }
        }

        Ok((
            ActOutcome::Hit {
                calc,
                success_to_hit,
                fact_to_hit,
            },
            killed,
        ))
    }

    /// Applies the target's armour to a rolled efficiency.
    fn calc_efficient(
        &mut self,
        target: &Person,
        act: &TacticalAct,
        efficient: i32,
    ) -> DamageEfficientCalc {
        let offence = act.stats().offence;
        let mut calc = DamageEfficientCalc::new(offence.ap_rank, efficient);

        let armors = target.armors();
        let Some(armor) = armors.iter().find(|armor| armor.impact == offence.impact) else {
            return calc;
        };
        calc.armor_rank = Some(armor.armor_rank);

        let rank_diff = offence.ap_rank - armor.armor_rank;
        if rank_diff >= self.config.armor_saturation_rank {
            return calc;
        }

        let fact = self.random.roll_armor_save();
        let success = hit::armor_save_threshold(rank_diff);
        calc.fact_armor_save_roll = Some(fact);
        calc.success_armor_save_roll = Some(success);

        if fact >= success {
            let absorption = hit::absorption(armor.absorption_level);
            calc.target_successfully_used_armor = true;
            calc.armor_absorption = absorption;
            calc.act_efficient_armor_blocked = (efficient - absorption).max(0);
        }

        calc
    }

    fn report_miss(
        &mut self,
        attacker: ActorId,
        target: ActorId,
        defence: Option<PersonDefenceItem>,
        success_to_hit: i32,
        fact_to_hit: i32,
    ) -> ActOutcome {
        match defence {
            Some(defence) => {
                self.push_event(ActorInteractionEvent::Dodge {
                    attacker,
                    target,
                    defence,
                    success_to_hit,
                    fact_to_hit,
                });
                ActOutcome::Dodged {
                    defence,
                    success_to_hit,
                    fact_to_hit,
                }
            }
            None => {
                self.push_event(ActorInteractionEvent::PureMiss {
                    attacker,
                    target,
                    success_to_hit,
                    fact_to_hit,
                });
                ActOutcome::Missed {
                    success_to_hit,
                    fact_to_hit,
                }
            }
        }
    }

    fn count_progress(&self, state: &mut SectorState, actor_id: ActorId, progress: JobProgress) {
        let Some(actor) = state.actors.get_mut(actor_id) else {
            return;
        };
        if !actor.person().can_evolve() {
            return;
        }
        if let Some(evolution) = actor.person_mut().evolution_mut() {
            let leveled = self.perk_resolver.apply_progress(&progress, evolution);
            if !leveled.is_empty() {
                tracing::debug!(actor = %actor_id, ?leveled, "perks leveled up");
            }
        }
    }

    fn wear_weapon(&mut self, state: &mut SectorState, actor_id: ActorId, act: &TacticalAct) {
        let (Some(slot), Some(service)) = (act.equipment_slot(), self.durable_service.as_mut())
        else {
            return;
        };
        let Some(actor) = state.actors.get_mut(actor_id) else {
            return;
        };
        let kind = actor.person().kind();
        if let Some(equipment) = actor.person_mut().equipment_mut(slot) {
            service.update_by_use(equipment, kind);
        }
    }

    fn wear_armor(&mut self, target: &mut Actor) {
        let Some(service) = self.durable_service.as_mut() else {
            return;
        };
        let slots = target.person().equipment().armor_slots();
        let Some(slot) = self.random.roll_damaged_equipment(&slots) else {
            return;
        };
        let kind = target.person().kind();
        if let Some(equipment) = target.person_mut().equipment_mut(slot) {
            service.update_by_use(equipment, kind);
        }
    }

    fn push_event(&mut self, event: ActorInteractionEvent) {
        if let Some(bus) = self.interaction_bus.as_mut() {
            bus.push_event(event);
        }
    }
}

impl fmt::Debug for TacticalActUsageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TacticalActUsageService")
            .field("config", &self.config)
            .field("durable_service", &self.durable_service.is_some())
            .field("interaction_bus", &self.interaction_bus.is_some())
            .finish()
    }
}

fn target_node(state: &SectorState, target: AttackTarget) -> Result<NodeId, UsageError> {
    let node = match target {
        AttackTarget::Actor(id) => state.actors.get(id).map(Actor::node),
        AttackTarget::Container(id) => state.containers.get(id).map(|container| container.node()),
    };
    node.ok_or(UsageError::TargetNotFound(target))
}

fn check_reach(
    state: &SectorState,
    from: NodeId,
    to: NodeId,
    act: &TacticalAct,
) -> Result<(), UsageError> {
    let from_cube = state
        .map
        .node(from)
        .ok_or(UsageError::NodeNotFound(from))?
        .cube;
    let to_cube = state.map.node(to).ok_or(UsageError::NodeNotFound(to))?.cube;

    if !act.check_distance(from_cube, to_cube) {
        let range = act.stats().range;
        return Err(UsageError::OutOfRange {
            act: act.sid().to_owned(),
            distance: from_cube.distance_to(to_cube),
            min: range.min,
            max: range.max,
        });
    }

    if !state.map.target_is_on_line(from, to)? {
        return Err(UsageError::NoLineOfSight {
            act: act.sid().to_owned(),
        });
    }
    Ok(())
}

fn heal_actor(state: &mut SectorState, target_id: ActorId, amount: i32) -> Result<(), UsageError> {
    let target = state
        .actors
        .get_mut(target_id)
        .ok_or(UsageError::TargetNotFound(AttackTarget::Actor(target_id)))?;
    target
        .person_mut()
        .survival_mut()
        .restore_stat(SurvivalStatType::Health, amount);
    Ok(())
}

fn unsupported(act: &TacticalAct) -> UsageError {
    UsageError::UnsupportedEffect {
        act: act.sid().to_owned(),
        effect: act.stats().effect,
    }
}
