//! Combat interaction events and the optional bus that carries them.

use crate::events::{EventHub, SubscriptionId};
use crate::schemes::PersonDefenceItem;

use super::{ActorId, DamageEfficientCalc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorInteractionEvent {
    /// The to-hit roll succeeded. Carries the full damage breakdown, even
    /// when armour absorbed everything.
    SuccessfulAttack {
        attacker: ActorId,
        target: ActorId,
        calc: DamageEfficientCalc,
        success_to_hit: i32,
        fact_to_hit: i32,
    },
    /// Missed because the target actively defended.
    Dodge {
        attacker: ActorId,
        target: ActorId,
        defence: PersonDefenceItem,
        success_to_hit: i32,
        fact_to_hit: i32,
    },
    /// Missed with no defence involved.
    PureMiss {
        attacker: ActorId,
        target: ActorId,
        success_to_hit: i32,
        fact_to_hit: i32,
    },
}

/// Sink for interaction events, e.g. a combat log.
pub trait ActorInteractionBus {
    fn push_event(&mut self, event: ActorInteractionEvent);
}

/// Bus that fans events out to subscribers.
#[derive(Debug, Default)]
pub struct InteractionEventBus {
    hub: EventHub<ActorInteractionEvent>,
}

impl InteractionEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ActorInteractionEvent) + 'static,
    {
        self.hub.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }
}

impl ActorInteractionBus for InteractionEventBus {
    fn push_event(&mut self, event: ActorInteractionEvent) {
        self.hub.publish(&event);
    }
}
