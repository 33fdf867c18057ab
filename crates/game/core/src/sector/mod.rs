//! Sector turn loop.
//!
//! A [`Sector`] owns the mutable state of one tactical map and steps it one
//! turn per [`Sector::update`] call:
//!
//! 1. **CollectTasks**: every task source is asked, in registration order.
//! 2. **ValidateTasks**: the collected list must not contain a completed
//!    task, a task for an unknown actor, or a task for a dead actor. Any
//!    violation aborts the turn before anything runs.
//! 3. **ExecuteTasks**: tasks run in source-then-insertion order. Fatal task
//!    errors abort the turn, all other errors are recorded in the report.
//! 4. **Upkeep**: passive survival decay, then removal of dead actors.
//!
//! Tasks are owned by the turn that collected them and handed back to their
//! source afterwards.
mod errors;
mod report;

pub use errors::{TurnError, TurnPhase};
pub use report::{TaskOutcome, TaskReport, TurnReport};

use std::collections::BTreeSet;

use crate::behaviour::{ActorTask, ActorTaskSource};
use crate::error::GameError;
use crate::map::HexMap;
use crate::tactics::{ActorId, ActorManager, ContainerManager, TacticalActUsageService};

/// Everything tasks and acts operate on.
#[derive(Debug, Default)]
pub struct SectorState {
    pub map: HexMap,
    pub actors: ActorManager,
    pub containers: ContainerManager,
}

impl SectorState {
    pub fn new(map: HexMap) -> Self {
        Self {
            map,
            actors: ActorManager::new(),
            containers: ContainerManager::new(),
        }
    }
}

pub struct Sector {
    state: SectorState,
    usage: TacticalActUsageService,
    sources: Vec<Box<dyn ActorTaskSource>>,
    turn: u64,
}

impl Sector {
    pub fn new(state: SectorState, usage: TacticalActUsageService) -> Self {
        Self {
            state,
            usage,
            sources: Vec::new(),
            turn: 0,
        }
    }

    /// Registers a task source. Sources are polled in registration order.
    pub fn add_source(&mut self, source: Box<dyn ActorTaskSource>) {
        self.sources.push(source);
    }

    pub fn state(&self) -> &SectorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SectorState {
        &mut self.state
    }

    pub fn usage_mut(&mut self) -> &mut TacticalActUsageService {
        &mut self.usage
    }

    /// Number of turns completed so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Runs one turn.
    pub fn update(&mut self) -> Result<TurnReport, TurnError> {
        let turn = self.turn + 1;
        let span = tracing::debug_span!("sector_turn", turn);
        let _guard = span.enter();

        let tasks = self.collect_tasks();
        tracing::debug!(tasks = tasks.len(), "tasks collected");

        if let Err(err) = self.validate_tasks(&tasks) {
            tracing::error!(error = %err, code = err.error_code(), "turn invariant violated");
            return Err(err);
        }

        let mut report = TurnReport::new(turn);
        let alive_before: BTreeSet<ActorId> = self
            .state
            .actors
            .iter()
            .filter(|actor| !actor.is_dead())
            .map(|actor| actor.id())
            .collect();

        self.execute_tasks(tasks, &mut report)?;
        self.upkeep(&alive_before, &mut report);

        self.turn = turn;
        Ok(report)
    }

    fn collect_tasks(&mut self) -> Vec<(usize, Box<dyn ActorTask>)> {
        let mut tasks = Vec::new();
        for (index, source) in self.sources.iter_mut().enumerate() {
            tasks.extend(
                source
                    .get_actor_tasks(&self.state)
                    .into_iter()
                    .map(|task| (index, task)),
            );
        }
        tasks
    }

    fn validate_tasks(&self, tasks: &[(usize, Box<dyn ActorTask>)]) -> Result<(), TurnError> {
        for (_, task) in tasks {
            let actor = task.actor();
            let name = task.name();
            if task.is_complete() {
                return Err(TurnError::CompletedTask { actor, task: name });
            }
            match self.state.actors.get(actor) {
                None => return Err(TurnError::MissingActor { actor, task: name }),
                Some(found) if found.is_dead() => {
                    return Err(TurnError::DeadActor { actor, task: name });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn execute_tasks(
        &mut self,
        tasks: Vec<(usize, Box<dyn ActorTask>)>,
        report: &mut TurnReport,
    ) -> Result<(), TurnError> {
        for (source, mut task) in tasks {
            let actor = task.actor();
            let name = task.name();

            let killed_this_turn = self
                .state
                .actors
                .get(actor)
                .is_none_or(|found| found.is_dead());

            let outcome = if killed_this_turn {
                tracing::debug!(%actor, task = name, "actor died earlier this turn, task skipped");
                TaskOutcome::Skipped
            } else if task.is_stalled() {
                TaskOutcome::Stalled
            } else {
                match task.execute(&mut self.state, &mut self.usage) {
                    Ok(()) if task.is_complete() => TaskOutcome::Completed,
                    Ok(()) if task.is_stalled() => TaskOutcome::Stalled,
                    Ok(()) => TaskOutcome::InProgress,
                    Err(err) if err.severity().is_fatal() => {
                        tracing::error!(%actor, task = name, error = %err, code = err.error_code(), "task aborted the turn");
                        return Err(TurnError::Aborted {
                            actor,
                            task: name,
                            source: err,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(%actor, task = name, error = %err, code = err.error_code(), "task failed");
                        TaskOutcome::Failed(err)
                    }
                }
            };

            let succeeded = outcome.succeeded();
            report.tasks.push(TaskReport {
                actor,
                task: name,
                outcome,
            });
            if let Some(owner) = self.sources.get_mut(source) {
                owner.task_executed(task, succeeded);
            }
        }
        Ok(())
    }

    fn upkeep(&mut self, alive_before: &BTreeSet<ActorId>, report: &mut TurnReport) {
        let config = self.usage.config().clone();

        if config.survival_decay {
            for actor in self.state.actors.iter_mut() {
                if !actor.is_dead() {
                    actor.person_mut().survival_mut().update();
                }
            }
        }

        let dead: Vec<ActorId> = self
            .state
            .actors
            .iter()
            .filter(|actor| actor.is_dead())
            .map(|actor| actor.id())
            .collect();
        report.deaths = dead
            .iter()
            .copied()
            .filter(|id| alive_before.contains(id))
            .collect();

        if config.remove_dead_actors {
            for id in dead {
                if self.state.actors.remove(id).is_some() {
                    report.removed.push(id);
                }
            }
        }
    }
}

impl core::fmt::Debug for Sector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sector")
            .field("turn", &self.turn)
            .field("actors", &self.state.actors.len())
            .field("sources", &self.sources.len())
            .finish()
    }
}
