//! Actor and container registries of a sector.

use std::collections::BTreeMap;

use crate::events::EventHub;
use crate::map::NodeId;
use crate::persons::{Inventory, Person};

use super::{Actor, ActorId, ContainerId, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    Added(ActorId),
    Removed(ActorId),
}

/// Actors of one sector, iterated in id order.
#[derive(Debug, Default)]
pub struct ActorManager {
    actors: BTreeMap<ActorId, Actor>,
    next_id: u32,
    events: EventHub<RegistryEvent>,
}

impl ActorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an actor with the next free id.
    pub fn spawn(&mut self, person: Person, owner: PlayerId, node: NodeId) -> ActorId {
        let id = ActorId(self.next_id);
        self.insert(Actor::new(id, person, owner, node));
        id
    }

    /// Adds a prebuilt actor, replacing any actor with the same id.
    pub fn insert(&mut self, actor: Actor) {
        let id = actor.id();
        self.next_id = self.next_id.max(id.0 + 1);
        self.actors.insert(id, actor);
        tracing::debug!(%id, "actor added");
        self.events.publish(&RegistryEvent::Added(id));
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let actor = self.actors.remove(&id)?;
        tracing::debug!(%id, "actor removed");
        self.events.publish(&RegistryEvent::Removed(id));
        Some(actor)
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.values_mut()
    }

    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.keys().copied().collect()
    }

    /// Living actor standing on a node.
    pub fn actor_at(&self, node: NodeId) -> Option<ActorId> {
        self.actors
            .values()
            .find(|actor| actor.node() == node && !actor.is_dead())
            .map(Actor::id)
    }

    pub fn owned_by(&self, owner: PlayerId) -> impl Iterator<Item = &Actor> {
        self.actors
            .values()
            .filter(move |actor| actor.owner() == owner)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn events_mut(&mut self) -> &mut EventHub<RegistryEvent> {
        &mut self.events
    }
}

/// Chest, door or other breakable prop on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropContainer {
    id: ContainerId,
    node: NodeId,
    durable: i32,
    inventory: Inventory,
}

impl PropContainer {
    pub fn new(id: ContainerId, node: NodeId, durable: i32) -> Self {
        Self {
            id,
            node,
            durable,
            inventory: Inventory::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn durable(&self) -> i32 {
        self.durable
    }

    pub fn is_broken(&self) -> bool {
        self.durable <= 0
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.durable -= amount;
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContainerManager {
    containers: BTreeMap<ContainerId, PropContainer>,
    next_id: u32,
}

impl ContainerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, node: NodeId, durable: i32) -> ContainerId {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        self.containers
            .insert(id, PropContainer::new(id, node, durable));
        id
    }

    pub fn get(&self, id: ContainerId) -> Option<&PropContainer> {
        self.containers.get(&id)
    }

    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut PropContainer> {
        self.containers.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropContainer> {
        self.containers.values()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixture_catalog, monster_scheme};

    #[test]
    fn spawn_assigns_increasing_ids() {
        let catalog = fixture_catalog();
        let mut actors = ActorManager::new();
        let a = actors.spawn(
            Person::from_scheme(&monster_scheme(), &catalog).unwrap(),
            PlayerId::MONSTERS,
            NodeId(0),
        );
        let b = actors.spawn(
            Person::from_scheme(&monster_scheme(), &catalog).unwrap(),
            PlayerId::MONSTERS,
            NodeId(1),
        );

        assert_eq!((a, b), (ActorId(0), ActorId(1)));
        assert_eq!(actors.actor_at(NodeId(1)), Some(b));
        assert!(actors.remove(a).is_some());
        assert!(actors.remove(a).is_none());
        assert_eq!(actors.ids(), vec![b]);
    }

    #[test]
    fn registry_announces_changes() {
        let catalog = fixture_catalog();
        let mut actors = ActorManager::new();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&seen);
        actors
            .events_mut()
            .subscribe(move |event| sink.borrow_mut().push(*event));

        let id = actors.spawn(
            Person::from_scheme(&monster_scheme(), &catalog).unwrap(),
            PlayerId::MONSTERS,
            NodeId(0),
        );
        actors.remove(id);

        assert_eq!(
            *seen.borrow(),
            vec![RegistryEvent::Added(id), RegistryEvent::Removed(id)]
        );
    }

    #[test]
    fn container_breaks_at_zero() {
        let mut containers = ContainerManager::new();
        let id = containers.spawn(NodeId(4), 5);
        let chest = containers.get_mut(id).unwrap();

        chest.take_damage(3);
        assert!(!chest.is_broken());
        chest.take_damage(2);
        assert!(chest.is_broken());
    }
}
