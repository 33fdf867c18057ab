/// Rule constants and tunable parameters of the tactical core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Minimum secondary-act roll needed for a secondary act to fire.
    pub secondary_act_threshold: i32,

    /// Rank difference (act AP rank minus armor rank) from which the armor
    /// is overwhelmed and no save is rolled.
    pub armor_saturation_rank: i32,

    /// To-hit threshold when the target has no matching defence.
    pub base_to_hit: i32,

    /// Apply the passive per-turn rate of every survival stat at turn end.
    pub survival_decay: bool,

    /// Remove actors that died during a turn from the registry at turn end.
    pub remove_dead_actors: bool,
}

impl GameConfig {
    // ===== rule-table constants =====
    /// Number of sides of the dice used for to-hit, armor save and secondary rolls.
    pub const ROLL_SIDES: u32 = 6;
    /// Maximum number of neighbours of a hex node.
    pub const MAX_NEIGHBORS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SECONDARY_ACT_THRESHOLD: i32 = 5;
    pub const DEFAULT_ARMOR_SATURATION_RANK: i32 = 10;
    pub const DEFAULT_BASE_TO_HIT: i32 = 2;

    pub fn new() -> Self {
        Self {
            secondary_act_threshold: Self::DEFAULT_SECONDARY_ACT_THRESHOLD,
            armor_saturation_rank: Self::DEFAULT_ARMOR_SATURATION_RANK,
            base_to_hit: Self::DEFAULT_BASE_TO_HIT,
            survival_decay: true,
            remove_dead_actors: true,
        }
    }

    /// Config without end-of-turn side effects. Handy for scripted scenarios.
    pub fn without_turn_upkeep() -> Self {
        Self {
            survival_decay: false,
            remove_dead_actors: false,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
