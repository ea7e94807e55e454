//! RNG module - seeded personalization and nondeterministic jitter
//!
//! Level personalization rides on `seeded_random`, a sine-based PRNG whose
//! output must be bit-reproducible for a given seed across platforms: the
//! player's level permutation is regenerated from the persisted seed, and a
//! different sequence would silently re-map their progress. IEEE-754 double
//! `sin` gives that guarantee; do not swap the formula.
//!
//! Also provides a simple LCG used only where nondeterminism is wanted
//! (the random component of player-seed generation).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PLAYER_SEED_MODULUS;

/// Deterministic pseudo-random value in [0, 1) for the given seed.
///
/// `frac(sin(seed) * 10000)` with the fractional part taken via `floor`, so
/// negative sine values still land in [0, 1).
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    x - x.floor()
}

/// Fisher-Yates shuffle driven by `seeded_random`.
///
/// Index `i` runs from `len - 1` down to 1; each step draws from
/// `seeded_random(seed + i)`, so the whole permutation is a pure function
/// of the seed.
pub fn seeded_shuffle<T>(items: &mut [T], seed: i64) {
    for i in (1..items.len()).rev() {
        let j = (seeded_random(seed + i as i64) * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Generate a fresh per-installation player seed.
///
/// `floor((now_ms + random * 1_000_000) mod 1_000_000)`: wall-clock millis
/// plus an LCG jitter component, reduced to [0, 1_000_000). Called once per
/// installation; the result is persisted and never regenerated.
pub fn generate_player_seed() -> i64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let now_ms = now.as_millis() as i64;
    let mut rng = SimpleRng::new(now.subsec_nanos());
    let jitter = rng.next_range(PLAYER_SEED_MODULUS as u32) as i64;
    (now_ms + jitter).rem_euclid(PLAYER_SEED_MODULUS)
}
