//! Turn loop over a [`Sector`].

use tactics_core::{ActorId, GameError, PlayerId, Sector, TurnReport};
use tracing::{debug, error, info, warn};

use crate::error::{Result, RuntimeError};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    /// The turn limit was reached.
    MaxTurns,
    /// A turn produced no tasks.
    Idle,
    /// Only one side has living actors left.
    Decided { winner: PlayerId },
}

/// Outcome of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub turns: u64,
    pub stop: StopReason,
    /// Every death in the order the turns reported them.
    pub deaths: Vec<ActorId>,
    /// Tasks that failed without aborting their turn.
    pub failures: usize,
}

/// Steps a sector until a stop condition.
///
/// Turns that report an error abort the run: the sector only returns
/// errors for broken turn invariants, all of them fatal.
#[derive(Debug)]
pub struct SectorRunner {
    sector: Sector,
    max_turns: u64,
}

impl SectorRunner {
    pub fn new(sector: Sector, max_turns: u64) -> Self {
        Self { sector, max_turns }
    }

    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    pub fn into_sector(self) -> Sector {
        self.sector
    }

    /// Runs one turn and logs what happened.
    pub fn step(&mut self) -> Result<TurnReport> {
        let report = self.sector.update().map_err(|source| {
            error!(
                turn = self.sector.turn() + 1,
                code = source.error_code(),
                error = %source,
                "turn aborted"
            );
            RuntimeError::Turn {
                turn: self.sector.turn() + 1,
                source,
            }
        })?;

        for failure in report.failures() {
            warn!(
                turn = report.turn,
                actor = %failure.actor,
                task = failure.task,
                outcome = ?failure.outcome,
                "task failed"
            );
        }
        for dead in &report.deaths {
            info!(turn = report.turn, actor = %dead, "actor died");
        }
        debug!(turn = report.turn, tasks = report.tasks.len(), "turn finished");
        Ok(report)
    }

    /// Runs turns until the limit, an idle turn, one side left standing, or
    /// a fatal error.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut deaths = Vec::new();
        let mut failures = 0;

        let stop = loop {
            if self.sector.turn() >= self.max_turns {
                break StopReason::MaxTurns;
            }
            let report = self.step()?;
            failures += report.failures().count();
            deaths.extend_from_slice(&report.deaths);

            if report.is_idle() {
                break StopReason::Idle;
            }
            if let Some(winner) = self.sole_survivor() {
                break StopReason::Decided { winner };
            }
        };

        let summary = RunSummary {
            turns: self.sector.turn(),
            stop,
            deaths,
            failures,
        };
        info!(
            turns = summary.turns,
            stop = %summary.stop,
            deaths = summary.deaths.len(),
            "run finished"
        );
        Ok(summary)
    }

    /// The only player with living actors, if exactly one has any.
    fn sole_survivor(&self) -> Option<PlayerId> {
        let mut owners = self
            .sector
            .state()
            .actors
            .iter()
            .filter(|actor| !actor.is_dead())
            .map(|actor| actor.owner());
        let first = owners.next()?;
        owners.all(|owner| owner == first).then_some(first)
    }
}
