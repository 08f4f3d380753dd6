//! The generator's single source of randomness.
//!
//! Passes run one after another over shared state, so one `SmallRng` owned by
//! the population context is drawn from in a fixed order: the same seed and
//! the same inputs always produce the same town.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded RNG threaded through every assignment pass.
///
/// Offers the draws the passes make directly; weighted tables and index
/// sampling go through [`inner`](Self::inner).
pub struct SimRng {
    rng: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// The underlying generator, for `WeightedIndex` and `index::sample`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Uniform draw in `[0, 1)`, compared against census fractions.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p`; values outside `[0, 1]` saturate.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p >= 1.0 {
            return true;
        }
        p > 0.0 && self.rng.gen_bool(p)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
