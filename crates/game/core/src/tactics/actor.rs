use core::fmt;
use std::sync::Arc;

use crate::events::EventHub;
use crate::map::NodeId;
use crate::persons::{
    JobProgress, PerkResolver, Person, PersonError, PropUsage, SurvivalStatType, TacticalAct,
};

use super::{ActorId, AttackTarget, PlayerId};

/// Notifications raised by an actor about itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorEvent {
    Moved { from: NodeId, to: NodeId },
    UsedAct { act: String, target: AttackTarget },
    DamageTaken { amount: i32 },
    UsedProp { sid: String },
}

/// A person placed on a map node and controlled by a player.
pub struct Actor {
    id: ActorId,
    person: Person,
    owner: PlayerId,
    node: NodeId,
    perk_resolver: Option<Arc<dyn PerkResolver>>,
    events: EventHub<ActorEvent>,
}

impl Actor {
    pub fn new(id: ActorId, person: Person, owner: PlayerId, node: NodeId) -> Self {
        Self {
            id,
            person,
            owner,
            node,
            perk_resolver: None,
            events: EventHub::new(),
        }
    }

    /// Lets the actor feed progress from damage it takes and props it uses.
    pub fn with_perk_resolver(mut self, resolver: Arc<dyn PerkResolver>) -> Self {
        self.perk_resolver = Some(resolver);
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_dead(&self) -> bool {
        self.person.is_dead()
    }

    pub fn can_be_damaged(&self) -> bool {
        !self.is_dead()
    }

    pub fn is_hostile_to(&self, other: &Actor) -> bool {
        self.owner != other.owner
    }

    pub fn events_mut(&mut self) -> &mut EventHub<ActorEvent> {
        &mut self.events
    }

    pub fn move_to(&mut self, node: NodeId) {
        let from = self.node;
        self.node = node;
        self.events.publish(&ActorEvent::Moved { from, to: node });
    }

    /// Announces that an act is being used. Resolution happens elsewhere.
    pub fn use_act(&mut self, target: AttackTarget, act: &TacticalAct) {
        self.events.publish(&ActorEvent::UsedAct {
            act: act.sid().to_owned(),
            target,
        });
    }

    /// Lowers health and records damage and hit progress.
    pub fn take_damage(&mut self, amount: i32) {
        self.person
            .survival_mut()
            .decrease_stat(SurvivalStatType::Health, amount);
        self.events.publish(&ActorEvent::DamageTaken { amount });

        self.apply_progress(JobProgress::TakeDamage {
            amount: amount.max(0) as u32,
        });
        self.apply_progress(JobProgress::TakeHit);
    }

    pub fn use_prop(&mut self, sid: &str) -> Result<PropUsage, PersonError> {
        let usage = self.person.use_prop(sid)?;
        self.events.publish(&ActorEvent::UsedProp {
            sid: sid.to_owned(),
        });
        self.apply_progress(JobProgress::ConsumeProviant);
        Ok(usage)
    }

    fn apply_progress(&mut self, progress: JobProgress) {
        let Some(resolver) = &self.perk_resolver else {
            return;
        };
        if !self.person.can_evolve() {
            return;
        }
        if let Some(evolution) = self.person.evolution_mut() {
            resolver.apply_progress(&progress, evolution);
        }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("person", &self.person.sid())
            .field("owner", &self.owner)
            .field("node", &self.node)
            .field("dead", &self.is_dead())
            .finish()
    }
}
