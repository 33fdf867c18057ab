//! Depletable survival stats with key-point notifications and death detection.

use std::collections::BTreeMap;

use crate::events::EventHub;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SurvivalStatType {
    Health,
    Satiety,
    Hydration,
    Intoxication,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HazardLevel {
    Lesser,
    Strong,
    Max,
}

/// Threshold on a stat. Crossing it raises a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyPoint {
    pub level: HazardLevel,
    pub value: i32,
}

impl KeyPoint {
    pub const fn new(level: HazardLevel, value: i32) -> Self {
        Self { level, value }
    }
}

/// One tracked stat.
///
/// `value` is expected to stay within `[min, max]`, but writes are not
/// clamped: health may go below zero on a lethal hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurvivalStat {
    pub stat_type: SurvivalStatType,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    /// Passive change per turn, subtracted by [`SurvivalData::update`].
    pub rate: i32,
    pub key_points: Vec<KeyPoint>,
}

impl SurvivalStat {
    pub fn new(stat_type: SurvivalStatType, value: i32, min: i32, max: i32) -> Self {
        Self {
            stat_type,
            value,
            min,
            max,
            rate: 0,
            key_points: Vec::new(),
        }
    }

    pub fn with_rate(mut self, rate: i32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_key_points(mut self, key_points: Vec<KeyPoint>) -> Self {
        self.key_points = key_points;
        self
    }

    /// Key points crossed when the value moves from `old` to `new`, in list
    /// order.
    ///
    /// A key point is crossed when it lies in the closed range between the
    /// two values, so a stat leaving a point it sat on fires that point too.
    /// An unchanged value crosses nothing.
    pub fn crossed_key_points(&self, old: i32, new: i32) -> Vec<KeyPoint> {
        if old == new {
            return Vec::new();
        }
        let (low, high) = if old < new { (old, new) } else { (new, old) };
        self.key_points
            .iter()
            .filter(|kp| (low..=high).contains(&kp.value))
            .copied()
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurvivalEvent {
    StatCrossKeyPoint {
        stat: SurvivalStatType,
        key_point: KeyPoint,
        value: i32,
    },
    /// Health reached zero or less. Raised once per person.
    Dead,
}

/// Survival stats of one person.
#[derive(Debug, Default)]
pub struct SurvivalData {
    stats: BTreeMap<SurvivalStatType, SurvivalStat>,
    is_dead: bool,
    events: EventHub<SurvivalEvent>,
}

impl SurvivalData {
    pub fn new(stats: impl IntoIterator<Item = SurvivalStat>) -> Self {
        Self {
            stats: stats
                .into_iter()
                .map(|stat| (stat.stat_type, stat))
                .collect(),
            is_dead: false,
            events: EventHub::new(),
        }
    }

    /// Full human set: health plus hunger, thirst and intoxication.
    pub fn human(hp: i32) -> Self {
        Self::new([
            Self::health(hp),
            Self::need(SurvivalStatType::Satiety),
            Self::need(SurvivalStatType::Hydration),
            SurvivalStat::new(SurvivalStatType::Intoxication, 0, 0, 100).with_key_points(vec![
                KeyPoint::new(HazardLevel::Lesser, 25),
                KeyPoint::new(HazardLevel::Strong, 50),
                KeyPoint::new(HazardLevel::Max, 75),
            ]),
        ])
    }

    /// Monsters only track health.
    pub fn monster(hp: i32) -> Self {
        Self::new([Self::health(hp)])
    }

    fn health(hp: i32) -> SurvivalStat {
        SurvivalStat::new(SurvivalStatType::Health, hp, 0, hp)
    }

    fn need(stat_type: SurvivalStatType) -> SurvivalStat {
        SurvivalStat::new(stat_type, 50, -100, 100)
            .with_rate(1)
            .with_key_points(vec![
                KeyPoint::new(HazardLevel::Lesser, 0),
                KeyPoint::new(HazardLevel::Strong, -25),
                KeyPoint::new(HazardLevel::Max, -50),
            ])
    }

    pub fn stat(&self, stat_type: SurvivalStatType) -> Option<&SurvivalStat> {
        self.stats.get(&stat_type)
    }

    pub fn value(&self, stat_type: SurvivalStatType) -> Option<i32> {
        self.stat(stat_type).map(|stat| stat.value)
    }

    pub fn stats(&self) -> impl Iterator<Item = &SurvivalStat> {
        self.stats.values()
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn events_mut(&mut self) -> &mut EventHub<SurvivalEvent> {
        &mut self.events
    }

    /// Raises a stat, saturating at the `i32` bounds. Returns false when the
    /// person does not track it.
    pub fn restore_stat(&mut self, stat_type: SurvivalStatType, amount: i32) -> bool {
        self.change_stat(stat_type, amount)
    }

    /// Lowers a stat. Returns false when the person does not track it.
    pub fn decrease_stat(&mut self, stat_type: SurvivalStatType, amount: i32) -> bool {
        self.change_stat(stat_type, amount.saturating_neg())
    }

    /// Overwrites a stat without raising key-point notifications.
    pub fn set_stat_force(&mut self, stat_type: SurvivalStatType, value: i32) -> bool {
        let Some(stat) = self.stats.get_mut(&stat_type) else {
            tracing::trace!(%stat_type, "stat not tracked, force set ignored");
            return false;
        };
        stat.value = value;
        self.check_death(stat_type, value);
        true
    }

    /// Applies the passive rate of every stat once.
    pub fn update(&mut self) {
        let rates: Vec<(SurvivalStatType, i32)> = self
            .stats
            .values()
            .filter(|stat| stat.rate != 0)
            .map(|stat| (stat.stat_type, stat.rate))
            .collect();

        for (stat_type, rate) in rates {
            self.change_stat(stat_type, rate.saturating_neg());
        }
    }

    fn change_stat(&mut self, stat_type: SurvivalStatType, delta: i32) -> bool {
        let Some(stat) = self.stats.get_mut(&stat_type) else {
            tracing::trace!(%stat_type, delta, "stat not tracked, change ignored");
            return false;
        };

        let old = stat.value;
        stat.value = stat.value.saturating_add(delta);
        let new = stat.value;
        let crossed = stat.crossed_key_points(old, new);

        for key_point in crossed {
            self.events.publish(&SurvivalEvent::StatCrossKeyPoint {
                stat: stat_type,
                key_point,
                value: new,
            });
        }

        self.check_death(stat_type, new);
        true
    }

    fn check_death(&mut self, stat_type: SurvivalStatType, value: i32) {
        if stat_type != SurvivalStatType::Health || value > 0 || self.is_dead {
            return;
        }
        self.is_dead = true;
        tracing::debug!(hp = value, "person died");
        self.events.publish(&SurvivalEvent::Dead);
    }
}
