//! Perk rule table.

use super::SchemeError;

/// Kind of activity that advances a perk job.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum JobType {
    /// Kill actors.
    Defeats,
    /// Land damaging hits on actors.
    AttackActors,
    /// Accumulate damage taken.
    ReceiveDamage,
    /// Get hit, regardless of damage amount.
    ReceiveHits,
    /// Eat or drink provisions.
    ConsumeProviant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobScheme {
    pub job_type: JobType,
    /// Progress needed to complete the job.
    pub value: u32,
}

/// One primary level of a perk.
///
/// A primary level is passed `max_value` times (its sub-levels) before the
/// perk moves on to the next primary level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkLevelScheme {
    pub max_value: u32,
    pub jobs: Vec<JobScheme>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkScheme {
    pub sid: String,
    pub levels: Vec<PerkLevelScheme>,
}

impl PerkScheme {
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.levels.is_empty() {
            return Err(SchemeError::PerkWithoutLevels {
                sid: self.sid.clone(),
            });
        }
        for (index, level) in self.levels.iter().enumerate() {
            if level.jobs.is_empty() || level.max_value == 0 {
                return Err(SchemeError::LevelWithoutJobs {
                    sid: self.sid.clone(),
                    level: index,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perk_needs_levels_and_jobs() {
        let mut scheme = PerkScheme {
            sid: "fighter".into(),
            levels: Vec::new(),
        };
        assert!(matches!(
            scheme.validate(),
            Err(SchemeError::PerkWithoutLevels { .. })
        ));

        scheme.levels.push(PerkLevelScheme {
            max_value: 1,
            jobs: Vec::new(),
        });
        assert!(matches!(
            scheme.validate(),
            Err(SchemeError::LevelWithoutJobs { level: 0, .. })
        ));

        scheme.levels[0].jobs.push(JobScheme {
            job_type: JobType::Defeats,
            value: 3,
        });
        assert_eq!(scheme.validate(), Ok(()));
    }
}
