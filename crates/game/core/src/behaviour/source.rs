use std::cell::RefCell;
use std::rc::Rc;

use crate::map::NodeId;
use crate::persons::TacticalAct;
use crate::sector::SectorState;
use crate::tactics::{ActorId, AttackTarget};

use super::{ActorTask, AttackTask, MoveTask, TaskError, UsePropTask};

/// Decides what the actors it controls do this turn.
pub trait ActorTaskSource {
    /// Called once per turn. May return no tasks.
    fn get_actor_tasks(&mut self, state: &SectorState) -> Vec<Box<dyn ActorTask>>;

    /// Receives every task back after it ran. `succeeded` is false when the
    /// task returned an error, was skipped, or was stalled.
    fn task_executed(&mut self, task: Box<dyn ActorTask>, succeeded: bool) {
        let _ = (task, succeeded);
    }
}

impl<T: ActorTaskSource + ?Sized> ActorTaskSource for Box<T> {
    fn get_actor_tasks(&mut self, state: &SectorState) -> Vec<Box<dyn ActorTask>> {
        (**self).get_actor_tasks(state)
    }

    fn task_executed(&mut self, task: Box<dyn ActorTask>, succeeded: bool) {
        (**self).task_executed(task, succeeded);
    }
}

/// Lets a caller keep a handle on a source the sector also owns.
impl<T: ActorTaskSource + ?Sized> ActorTaskSource for Rc<RefCell<T>> {
    fn get_actor_tasks(&mut self, state: &SectorState) -> Vec<Box<dyn ActorTask>> {
        self.borrow_mut().get_actor_tasks(state)
    }

    fn task_executed(&mut self, task: Box<dyn ActorTask>, succeeded: bool) {
        self.borrow_mut().task_executed(task, succeeded);
    }
}

/// Player intents for a single actor.
///
/// Holds at most one intent. A move that is still underway after a turn is
/// kept and offered again next turn until it completes, fails, or is
/// replaced by a new intent.
#[derive(Debug)]
pub struct HumanTaskSource {
    actor: ActorId,
    intent: Option<Box<dyn ActorTask>>,
}

impl HumanTaskSource {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            intent: None,
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn has_intent(&self) -> bool {
        self.intent.is_some()
    }

    /// Replaces the current intent.
    pub fn set_intent(&mut self, task: Box<dyn ActorTask>) {
        self.intent = Some(task);
    }

    pub fn clear_intent(&mut self) {
        self.intent = None;
    }

    pub fn move_to(&mut self, state: &SectorState, target: NodeId) -> Result<(), TaskError> {
        let actor = state
            .actors
            .get(self.actor)
            .ok_or(TaskError::ActorNotFound(self.actor))?;
        self.set_intent(Box::new(MoveTask::new(actor, target, &state.map)));
        Ok(())
    }

    pub fn attack(&mut self, target: impl Into<AttackTarget>, act: TacticalAct) {
        self.set_intent(Box::new(AttackTask::with_act(self.actor, target, act)));
    }

    pub fn use_prop(&mut self, sid: impl Into<String>) {
        self.set_intent(Box::new(UsePropTask::new(self.actor, sid)));
    }
}

impl ActorTaskSource for HumanTaskSource {
    fn get_actor_tasks(&mut self, state: &SectorState) -> Vec<Box<dyn ActorTask>> {
        let alive = state
            .actors
            .get(self.actor)
            .is_some_and(|actor| !actor.is_dead());
        if !alive {
            self.intent = None;
            return Vec::new();
        }

        match self.intent.take() {
            Some(task) if task.is_complete() || task.is_stalled() => {
                tracing::debug!(actor = %self.actor, task = task.name(), state = %task.state(), "intent dropped");
                Vec::new()
            }
            Some(task) => vec![task],
            None => Vec::new(),
        }
    }

    fn task_executed(&mut self, task: Box<dyn ActorTask>, succeeded: bool) {
        if succeeded && !task.is_complete() && self.intent.is_none() {
            self.intent = Some(task);
        }
    }
}
