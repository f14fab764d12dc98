//! RNG module - uniform piece selection
//!
//! Every draw picks one of the seven kinds with equal probability,
//! independently of earlier draws. There is no bag and no repeat protection.
//! The generator is a small LCG so a seed fully determines a game.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Draw a kind uniformly from all seven
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.next_range(PieceKind::ALL.len() as u32) as usize)
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [0u32; 7];
        for _ in 0..700 {
            seen[rng.next_kind().index()] += 1;
        }
        for (i, count) in seen.iter().enumerate() {
            assert!(*count > 0, "{:?} never drawn", PieceKind::from_index(i));
        }
    }

    #[test]
    fn test_draws_can_repeat() {
        // Independent draws: some adjacent pair must repeat over a long run.
        let mut rng = SimpleRng::new(3);
        let mut prev = rng.next_kind();
        let mut repeated = false;
        for _ in 0..500 {
            let next = rng.next_kind();
            repeated |= next == prev;
            prev = next;
        }
        assert!(repeated);
    }
}
