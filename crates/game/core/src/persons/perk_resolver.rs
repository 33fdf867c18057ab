//! Turning gameplay activity into perk progress.

use crate::schemes::JobType;

use super::EvolutionData;

/// Something a person did that may advance perk jobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobProgress {
    DefeatActor,
    AttackActor,
    TakeDamage { amount: u32 },
    TakeHit,
    ConsumeProviant,
}

impl JobProgress {
    pub const fn job_type(&self) -> JobType {
        match self {
            Self::DefeatActor => JobType::Defeats,
            Self::AttackActor => JobType::AttackActors,
            Self::TakeDamage { .. } => JobType::ReceiveDamage,
            Self::TakeHit => JobType::ReceiveHits,
            Self::ConsumeProviant => JobType::ConsumeProviant,
        }
    }

    /// Progress units added to matching jobs.
    pub const fn amount(&self) -> u32 {
        match self {
            Self::TakeDamage { amount } => *amount,
            _ => 1,
        }
    }
}

/// Applies job progress to a person's perks.
pub trait PerkResolver {
    /// Returns the sids of perks that leveled up.
    fn apply_progress(&self, progress: &JobProgress, evolution: &mut EvolutionData) -> Vec<String>;
}

/// Adds progress to every matching job of unfinished perks and levels up
/// each perk whose jobs are all complete.
#[derive(Clone, Copy, Debug, Default)]
pub struct JobPerkResolver;

impl PerkResolver for JobPerkResolver {
    fn apply_progress(&self, progress: &JobProgress, evolution: &mut EvolutionData) -> Vec<String> {
        let job_type = progress.job_type();
        let amount = progress.amount();

        let mut completed = Vec::new();
        for perk in evolution.perks_mut() {
            if perk.is_maxed() {
                continue;
            }
            for job in perk.jobs_mut() {
                if job.job_type == job_type && !job.is_complete() {
                    job.progress = job.progress.saturating_add(amount).min(job.value);
                }
            }
            if perk.jobs_complete() {
                completed.push(perk.sid().to_owned());
            }
        }

        completed
            .into_iter()
            .filter(|sid| evolution.perk_level_up(sid).is_ok())
            .collect()
    }
}
