use crate::behaviour::TaskError;
use crate::tactics::ActorId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed,
    /// Ran and has more to do on later turns.
    InProgress,
    Stalled,
    /// The actor died earlier in the same turn. This is the only way a task
    /// of a dead actor gets past validation without aborting the turn.
    Skipped,
    Failed(TaskError),
}

impl TaskOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, TaskOutcome::Completed | TaskOutcome::InProgress)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskReport {
    pub actor: ActorId,
    pub task: &'static str,
    pub outcome: TaskOutcome,
}

/// What happened during one sector turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    /// Tasks in execution order.
    pub tasks: Vec<TaskReport>,
    /// Actors that died this turn, in id order.
    pub deaths: Vec<ActorId>,
    /// Dead actors taken out of the registry at turn end.
    pub removed: Vec<ActorId>,
}

impl TurnReport {
    pub fn new(turn: u64) -> Self {
        Self {
            turn,
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskReport> {
        self.tasks
            .iter()
            .filter(|report| matches!(report.outcome, TaskOutcome::Failed(_)))
    }
}
