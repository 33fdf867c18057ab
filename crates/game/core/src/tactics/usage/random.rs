use crate::config::GameConfig;
use crate::env::Dice;
use crate::schemes::Roll;

/// Every random decision the act resolver makes.
///
/// Split out so scenarios and tests can script exact outcomes.
pub trait TacticalActUsageRandomSource {
    /// Damage or heal amount of an act.
    fn roll_efficient(&mut self, roll: &Roll) -> i32;

    fn roll_to_hit(&mut self, roll: &Roll) -> i32;

    fn roll_armor_save(&mut self) -> i32;

    /// Decides whether a secondary act fires this time.
    fn roll_use_secondary_act(&mut self) -> i32;

    /// Picks which of the given equipment slots takes wear from a hit.
    fn roll_damaged_equipment(&mut self, slots: &[usize]) -> Option<usize>;
}

/// Random source backed by a [`Dice`].
#[derive(Clone, Debug)]
pub struct DiceRandomSource<D: Dice> {
    dice: D,
}

impl<D: Dice> DiceRandomSource<D> {
    pub fn new(dice: D) -> Self {
        Self { dice }
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    fn roll_sum(&mut self, roll: &Roll) -> i32 {
        let total: i32 = (0..roll.count)
            .map(|_| self.dice.roll(roll.dice) as i32)
            .sum();
        total + roll.modifier
    }
}

impl<D: Dice> TacticalActUsageRandomSource for DiceRandomSource<D> {
    fn roll_efficient(&mut self, roll: &Roll) -> i32 {
        self.roll_sum(roll)
    }

    fn roll_to_hit(&mut self, roll: &Roll) -> i32 {
        self.roll_sum(roll)
    }

    fn roll_armor_save(&mut self) -> i32 {
        self.dice.roll(GameConfig::ROLL_SIDES) as i32
    }

    fn roll_use_secondary_act(&mut self) -> i32 {
        self.dice.roll(GameConfig::ROLL_SIDES) as i32
    }

    fn roll_damaged_equipment(&mut self, slots: &[usize]) -> Option<usize> {
        self.dice.pick(slots.len()).map(|index| slots[index])
    }
}
