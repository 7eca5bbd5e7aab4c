//! Seeded deterministic generator
//!
//! Every random decision in the pipeline goes through `Prng` so a seed fully
//! determines the output. The generator is Xoshiro256++, which produces the
//! same stream on every target (including wasm32).

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Clone, Debug)]
pub struct Prng {
    rng: Xoshiro256PlusPlus,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [0, 1)
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in [lo, hi_excl). Returns `lo` for an empty range.
    pub fn rand_int(&mut self, lo: i32, hi_excl: i32) -> i32 {
        if hi_excl <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi_excl)
    }

    /// Uniform float in [lo, hi)
    pub fn rand_float(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.random() * (hi - lo)
    }

    /// Uniform pick from a list. Repeated entries act as weights.
    pub fn rand_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
