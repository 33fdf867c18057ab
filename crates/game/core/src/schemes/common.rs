//! Small value types shared by several rule tables.

/// Strength grade used by defences, armour absorption and consume rules.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum PersonRuleLevel {
    #[default]
    None,
    Lesser,
    Normal,
    Grand,
    Absolute,
}

impl PersonRuleLevel {
    /// Ordinal strength: `None` = 0 up to `Absolute` = 4.
    pub const fn rank(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Lesser => 1,
            Self::Normal => 2,
            Self::Grand => 3,
            Self::Absolute => 4,
        }
    }
}

/// Dice expression `count`d`dice` + `modifier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub dice: u32,
    pub count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: i32,
}

impl Roll {
    pub const fn new(dice: u32, count: u32) -> Self {
        Self {
            dice,
            count,
            modifier: 0,
        }
    }

    pub const fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// A single six-sided die, the default to-hit roll.
    pub const fn d6() -> Self {
        Self::new(6, 1)
    }

    pub const fn min(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    pub const fn max(&self) -> i32 {
        (self.dice * self.count) as i32 + self.modifier
    }

    pub const fn is_valid(&self) -> bool {
        self.dice > 0 && self.count > 0
    }
}

/// Inclusive distance interval `[min, max]` of a tactical act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActRange {
    pub min: u32,
    pub max: u32,
}

impl ActRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Adjacent cells only.
    pub const fn melee() -> Self {
        Self::new(1, 1)
    }

    pub const fn contains(&self, distance: u32) -> bool {
        distance >= self.min && distance <= self.max
    }

    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }
}
