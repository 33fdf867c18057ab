//! Skill stats and perk progression of a person.

use std::sync::Arc;

use crate::env::SchemeOracle;
use crate::events::EventHub;
use crate::schemes::{JobType, PerkScheme};

use super::PersonError;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillStatType {
    Ballistic,
    Melee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillStat {
    pub stat_type: SkillStatType,
    pub value: i32,
}

/// Reached level of a perk: index of the primary level and the sub-level
/// within it (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkLevel {
    pub primary: usize,
    pub sub: u32,
}

impl PerkLevel {
    pub const fn new(primary: usize, sub: u32) -> Self {
        Self { primary, sub }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkJob {
    pub job_type: JobType,
    /// Progress needed.
    pub value: u32,
    pub progress: u32,
}

impl PerkJob {
    pub fn is_complete(&self) -> bool {
        self.progress >= self.value
    }
}

/// A perk instance owned by one person.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perk {
    scheme: Arc<PerkScheme>,
    current_level: Option<PerkLevel>,
    current_jobs: Vec<PerkJob>,
    maxed: bool,
}

impl Perk {
    /// Not-started perk working on the jobs of its first level.
    pub fn new(scheme: Arc<PerkScheme>) -> Self {
        let mut perk = Self {
            scheme,
            current_level: None,
            current_jobs: Vec::new(),
            maxed: false,
        };
        perk.reset_jobs();
        perk
    }

    /// Perk restored at a given level with given job progress.
    pub fn restored(
        scheme: Arc<PerkScheme>,
        current_level: Option<PerkLevel>,
        current_jobs: Vec<PerkJob>,
    ) -> Self {
        let maxed = current_level.is_some() && Self::level_after(&scheme, current_level).is_none();
        Self {
            scheme,
            current_level,
            current_jobs,
            maxed,
        }
    }

    pub fn sid(&self) -> &str {
        &self.scheme.sid
    }

    pub fn scheme(&self) -> &Arc<PerkScheme> {
        &self.scheme
    }

    pub fn current_level(&self) -> Option<PerkLevel> {
        self.current_level
    }

    pub fn jobs(&self) -> &[PerkJob] {
        &self.current_jobs
    }

    pub fn jobs_mut(&mut self) -> &mut [PerkJob] {
        &mut self.current_jobs
    }

    pub fn is_maxed(&self) -> bool {
        self.maxed
    }

    /// All jobs of the level being worked on are done.
    pub fn jobs_complete(&self) -> bool {
        !self.maxed
            && !self.current_jobs.is_empty()
            && self.current_jobs.iter().all(PerkJob::is_complete)
    }

    /// Level reached by the next level-up, `None` for a maxed perk.
    pub fn next_level(&self) -> Option<PerkLevel> {
        Self::level_after(&self.scheme, self.current_level)
    }

    fn level_after(scheme: &PerkScheme, current: Option<PerkLevel>) -> Option<PerkLevel> {
        let Some(current) = current else {
            return (!scheme.levels.is_empty()).then_some(PerkLevel::new(0, 1));
        };
        let level = scheme.levels.get(current.primary)?;
        if current.sub < level.max_value {
            Some(PerkLevel::new(current.primary, current.sub + 1))
        } else if current.primary + 1 < scheme.levels.len() {
            Some(PerkLevel::new(current.primary + 1, 1))
        } else {
            None
        }
    }

    fn reset_jobs(&mut self) {
        self.current_jobs = match self.next_level() {
            Some(next) => self.scheme.levels[next.primary]
                .jobs
                .iter()
                .map(|job| PerkJob {
                    job_type: job.job_type,
                    value: job.value,
                    progress: 0,
                })
                .collect(),
            None => Vec::new(),
        };
    }

    fn level_up(&mut self) -> Option<PerkLevel> {
        let next = self.next_level()?;
        self.current_level = Some(next);
        self.maxed = self.next_level().is_none();
        self.reset_jobs();
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PerkEvent {
    LeveledUp { sid: String, level: PerkLevel },
}

/// Skills and perks of a person that can evolve.
#[derive(Debug)]
pub struct EvolutionData {
    stats: Vec<SkillStat>,
    perks: Vec<Perk>,
    events: EventHub<PerkEvent>,
}

impl EvolutionData {
    pub const BASE_SKILL: i32 = 10;

    pub fn new<O: SchemeOracle + ?Sized>(oracle: &O) -> Self {
        let mut data = Self {
            stats: vec![
                SkillStat {
                    stat_type: SkillStatType::Ballistic,
                    value: Self::BASE_SKILL,
                },
                SkillStat {
                    stat_type: SkillStatType::Melee,
                    value: Self::BASE_SKILL,
                },
            ],
            perks: Vec::new(),
            events: EventHub::new(),
        };
        data.sync_perks(oracle);
        data
    }

    pub fn skill(&self, stat_type: SkillStatType) -> Option<i32> {
        self.stats
            .iter()
            .find(|stat| stat.stat_type == stat_type)
            .map(|stat| stat.value)
    }

    pub fn stats(&self) -> &[SkillStat] {
        &self.stats
    }

    pub fn perks(&self) -> &[Perk] {
        &self.perks
    }

    pub fn perks_mut(&mut self) -> &mut [Perk] {
        &mut self.perks
    }

    pub fn perk(&self, sid: &str) -> Option<&Perk> {
        self.perks.iter().find(|perk| perk.sid() == sid)
    }

    pub fn events_mut(&mut self) -> &mut EventHub<PerkEvent> {
        &mut self.events
    }

    /// Adds a not-started perk for every scheme that has none yet.
    ///
    /// Existing perks keep their level and progress.
    pub fn sync_perks<O: SchemeOracle + ?Sized>(&mut self, oracle: &O) {
        for scheme in oracle.perks() {
            if self.perk(&scheme.sid).is_none() {
                self.perks.push(Perk::new(scheme));
            }
        }
    }

    /// Replaces the perk set, then adds perks for schemes missing from it.
    pub fn set_perks_forced<O: SchemeOracle + ?Sized>(&mut self, perks: Vec<Perk>, oracle: &O) {
        self.perks = perks;
        self.sync_perks(oracle);
    }

    /// Moves a perk to its next level and announces it.
    pub fn perk_level_up(&mut self, sid: &str) -> Result<PerkLevel, PersonError> {
        let perk = self
            .perks
            .iter_mut()
            .find(|perk| perk.sid() == sid)
            .ok_or_else(|| PersonError::UnknownPerk {
                sid: sid.to_owned(),
            })?;

        let level = perk.level_up().ok_or_else(|| PersonError::PerkMaxed {
            sid: sid.to_owned(),
        })?;

        tracing::debug!(perk = sid, ?level, "perk leveled up");
        self.events.publish(&PerkEvent::LeveledUp {
            sid: sid.to_owned(),
            level,
        });
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{SchemeCatalog, SchemeOracle};
    use crate::schemes::{JobScheme, PerkLevelScheme};

    fn two_level_perk() -> PerkScheme {
        PerkScheme {
            sid: "hunter".into(),
            levels: vec![
                PerkLevelScheme {
                    max_value: 2,
                    jobs: vec![JobScheme {
                        job_type: JobType::Defeats,
                        value: 1,
                    }],
                },
                PerkLevelScheme {
                    max_value: 1,
                    jobs: vec![JobScheme {
                        job_type: JobType::AttackActors,
                        value: 5,
                    }],
                },
            ],
        }
    }

    fn catalog() -> SchemeCatalog {
        let mut catalog = SchemeCatalog::new();
        catalog.insert_perk(two_level_perk()).unwrap();
        catalog
    }

    #[test]
    fn new_perks_start_without_level() {
        let data = EvolutionData::new(&catalog());
        let perk = data.perk("hunter").unwrap();

        assert_eq!(perk.current_level(), None);
        assert_eq!(perk.jobs().len(), 1);
        assert_eq!(perk.jobs()[0].job_type, JobType::Defeats);
        assert_eq!(data.skill(SkillStatType::Melee), Some(10));
    }

    #[test]
    fn sync_is_idempotent_and_keeps_progress() {
        let catalog = catalog();
        let mut data = EvolutionData::new(&catalog);
        data.perks_mut()[0].jobs_mut()[0].progress = 1;

        data.sync_perks(&catalog);
        data.sync_perks(&catalog);

        assert_eq!(data.perks().len(), 1);
        assert_eq!(data.perks()[0].jobs()[0].progress, 1);
    }

    #[test]
    fn levels_walk_sub_levels_then_primary_levels() {
        let mut data = EvolutionData::new(&catalog());

        assert_eq!(data.perk_level_up("hunter"), Ok(PerkLevel::new(0, 1)));
        assert_eq!(data.perk_level_up("hunter"), Ok(PerkLevel::new(0, 2)));

        let perk = data.perk("hunter").unwrap();
        assert_eq!(perk.jobs()[0].job_type, JobType::AttackActors);

        assert_eq!(data.perk_level_up("hunter"), Ok(PerkLevel::new(1, 1)));
        let perk = data.perk("hunter").unwrap();
        assert!(perk.is_maxed());
        assert!(perk.jobs().is_empty());

        assert_eq!(
            data.perk_level_up("hunter"),
            Err(PersonError::PerkMaxed {
                sid: "hunter".into()
            })
        );
    }

    #[test]
    fn level_up_is_announced() {
        let mut data = EvolutionData::new(&catalog());
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&seen);
        data.events_mut()
            .subscribe(move |event| sink.borrow_mut().push(event.clone()));

        data.perk_level_up("hunter").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![PerkEvent::LeveledUp {
                sid: "hunter".into(),
                level: PerkLevel::new(0, 1)
            }]
        );
    }

    #[test]
    fn forced_perks_are_completed_from_schemes() {
        let catalog = catalog();
        let mut data = EvolutionData::new(&catalog);
        let scheme = catalog.perk("hunter").unwrap();
        let restored = Perk::restored(scheme, Some(PerkLevel::new(1, 1)), Vec::new());

        data.set_perks_forced(vec![restored], &catalog);

        assert_eq!(data.perks().len(), 1);
        assert!(data.perks()[0].is_maxed());
    }

    #[test]
    fn unknown_perk_is_an_error() {
        let mut data = EvolutionData::new(&catalog());
        assert!(matches!(
            data.perk_level_up("nope"),
            Err(PersonError::UnknownPerk { .. })
        ));
    }
}
