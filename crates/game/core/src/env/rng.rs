//! Deterministic dice for combat and behaviour rolls.
//!
//! Every random decision in a sector goes through a [`Dice`] so that a whole
//! fight can be replayed from a single seed, and tests can swap in scripted
//! values.

/// Stateful source of uniformly distributed dice rolls.
pub trait Dice {
    /// Advances the generator and returns the next raw value.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive). A zero-sided die yields 0.
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32() % sides) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = max.abs_diff(min) + 1;
        min + (self.next_u32() % span) as i32
    }

    /// Picks an index in `0..len`, or `None` for an empty collection.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32() as usize % len)
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
///
/// Same seed always produces the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current generator state. Feeding it back into [`PcgDice::new`]
    /// resumes the sequence.
    pub const fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Dice for PcgDice {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgDice::new(42);
        let mut b = PcgDice::new(42);
        let first: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn resumes_from_state() {
        let mut dice = PcgDice::new(7);
        dice.next_u32();
        let mut resumed = PcgDice::new(dice.state());
        assert_eq!(dice.next_u32(), resumed.next_u32());
    }

    #[test]
    fn rolls_stay_in_bounds() {
        let mut dice = PcgDice::new(1);
        for _ in 0..500 {
            let roll = dice.roll(6);
            assert!((1..=6).contains(&roll));
            let value = dice.range(-3, 4);
            assert!((-3..=4).contains(&value));
        }
        assert_eq!(dice.roll(0), 0);
        assert_eq!(dice.range(5, 5), 5);
        assert_eq!(dice.pick(0), None);
    }
}
