/// Breakdown of how a successful hit turned into damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEfficientCalc {
    pub act_ap_rank: i32,
    /// Rank of the armour matching the act's impact, if any.
    pub armor_rank: Option<i32>,
    pub fact_armor_save_roll: Option<i32>,
    pub success_armor_save_roll: Option<i32>,
    pub target_successfully_used_armor: bool,
    pub armor_absorption: i32,
    /// Efficiency as rolled.
    pub act_efficient: i32,
    /// Efficiency after absorption, never negative.
    pub act_efficient_armor_blocked: i32,
}

impl DamageEfficientCalc {
    pub fn new(act_ap_rank: i32, act_efficient: i32) -> Self {
        Self {
            act_ap_rank,
            act_efficient,
            act_efficient_armor_blocked: act_efficient,
            ..Self::default()
        }
    }

    /// Damage actually dealt.
    pub fn result_efficient(&self) -> i32 {
        self.act_efficient_armor_blocked
    }

    pub fn rank_diff(&self) -> Option<i32> {
        self.armor_rank.map(|rank| self.act_ap_rank - rank)
    }
}
