//! Deterministic randomness for combat rolls.
//!
//! Nothing in the rules crate touches ambient randomness. Every probabilistic
//! decision draws from an [`RngOracle`] through a per-step [`Dice`] cursor, so
//! a battle replays identically from `(seed, inputs)`.

/// Stateless random source: same seed in, same value out.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG-XSH-RR: a single multiply-add step followed by an xorshift/rotate
/// output permutation. Small state, strong statistical quality, and fully
/// deterministic, which is all combat needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn advance(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn permute(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::permute(Self::advance(seed))
    }
}

/// Derive the seed for one engine step from the battle seed and step nonce.
///
/// SplitMix64-style mixing keeps nearby nonces uncorrelated.
pub fn compute_seed(game_seed: u64, nonce: u64) -> u64 {
    let mut hash = game_seed ^ nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Roll cursor for one engine step.
///
/// Each draw advances an internal counter that is mixed into the step seed,
/// so one step can make any number of independent rolls (evasion, crit,
/// status chances, target picks) without coordinating salt values.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    counter: u64,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            counter: 0,
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.counter += 1;
        self.rng
            .next_u32(self.seed ^ self.counter.wrapping_mul(0x517cc1b727220a95))
    }

    /// Uniform value in [0, 1).
    pub fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Bernoulli roll: true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.unit() < p
    }

    /// Uniform integer in the inclusive range [lo, hi].
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        let span = (hi - lo + 1) as u32;
        lo + (self.next_u32() % span) as i32
    }

    /// Uniform index into a collection of the given length.
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }

    /// Index drawn from a discrete weight table. Zero-sum tables pick 0.
    pub fn weighted(&mut self, weights: &[f64]) -> usize {
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 || weights.is_empty() {
            return 0;
        }
        let mut needle = self.unit() * sum;
        for (i, w) in weights.iter().enumerate() {
            needle -= w;
            if needle <= 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Up to `count` distinct indices in [0, len), in draw order.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..len).collect();
        let mut picked = Vec::with_capacity(count.min(len));
        while !pool.is_empty() && picked.len() < count {
            let at = self.index(pool.len());
            picked.push(pool.swap_remove(at));
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_rolls() {
        let rng = PcgRng;
        let seed = compute_seed(42, 7);
        let mut a = Dice::new(&rng, seed);
        let mut b = Dice::new(&rng, seed);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_nonces_decorrelate_steps() {
        let rng = PcgRng;
        let mut a = Dice::new(&rng, compute_seed(42, 7));
        let mut b = Dice::new(&rng, compute_seed(42, 8));
        let same = (0..16).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 16);
    }

    #[test]
    fn chance_handles_degenerate_probabilities() {
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 1);
        assert!(!dice.chance(0.0));
        assert!(dice.chance(1.0));
        assert!(!dice.chance(-0.5));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 99);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2000 {
            let v = dice.range_i32(-5, 6);
            assert!((-5..=6).contains(&v));
            seen_lo |= v == -5;
            seen_hi |= v == 6;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn sample_indices_are_distinct() {
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 123);
        let picks = dice.sample_indices(5, 3);
        assert_eq!(picks.len(), 3);
        let mut sorted = picks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }
}
