//! Census-weighted commute sampling.

use rand::distributions::{Distribution, WeightedIndex};

use sp_census::{TimeBucket, WeightedTable};
use sp_core::{CommuteMode, ModeSpeeds, PopulationConfig, SimRng};

use crate::{TransitError, TransitResult};

/// Draws commute times, modes and carpool sizes from the census tables.
///
/// The weighted distributions are built once in [`new`](Self::new), so
/// sampling itself cannot fail.
#[derive(Clone, Debug)]
pub struct CommuteSampler {
    buckets:       Vec<TimeBucket>,
    time_dist:     WeightedIndex<f64>,
    modes:         Vec<CommuteMode>,
    mode_dist:     WeightedIndex<f64>,
    carpool_sizes: Vec<u8>,
    size_dist:     WeightedIndex<f64>,
    speeds:        ModeSpeeds,
    t_wfh:         f64,
    t_walk:        f64,
}

impl CommuteSampler {
    /// # Errors
    ///
    /// [`TransitError::EmptyTable`] if a table has no rows,
    /// [`TransitError::InvalidWeights`] if its weights are negative or all
    /// zero.
    pub fn new(
        times:         &WeightedTable<TimeBucket>,
        modes:         &WeightedTable<CommuteMode>,
        carpool_sizes: &WeightedTable<u8>,
        config:        &PopulationConfig,
    ) -> TransitResult<Self> {
        Ok(Self {
            buckets:       times.values().to_vec(),
            time_dist:     weighted("travel time", times.weights())?,
            modes:         modes.values().to_vec(),
            mode_dist:     weighted("travel mode", modes.weights())?,
            carpool_sizes: carpool_sizes.values().to_vec(),
            size_dist:     weighted("carpool size", carpool_sizes.weights())?,
            speeds:        config.mode_speeds.clone(),
            t_wfh:         config.t_wfh,
            t_walk:        config.t_walk,
        })
    }

    /// `n` travel times in minutes, each the representative value of a
    /// sampled bucket.
    pub fn sample_times(&self, rng: &mut SimRng, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| self.buckets[self.time_dist.sample(rng.inner())].representative())
            .collect()
    }

    pub fn sample_modes(&self, rng: &mut SimRng, n: usize) -> Vec<CommuteMode> {
        (0..n)
            .map(|_| self.modes[self.mode_dist.sample(rng.inner())])
            .collect()
    }

    /// `n` (time, mode) pairs; time and mode are drawn independently.
    pub fn sample_commutes(&self, rng: &mut SimRng, n: usize) -> Vec<(f64, CommuteMode)> {
        let times = self.sample_times(rng, n);
        let modes = self.sample_modes(rng, n);
        times.into_iter().zip(modes).collect()
    }

    /// `n` target carpool sizes (2, 3 or 4+).
    pub fn sample_carpool_sizes(&self, rng: &mut SimRng, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| self.carpool_sizes[self.size_dist.sample(rng.inner())])
            .collect()
    }

    /// Distance, km, covered in `minutes` by `mode`.
    #[inline]
    pub fn implied_distance_km(&self, mode: CommuteMode, minutes: f64) -> f64 {
        self.speeds.km_per_min(mode) * minutes
    }

    /// Short enough that the commute is working from home.
    #[inline]
    pub fn is_wfh_time(&self, minutes: f64) -> bool {
        minutes <= self.t_wfh
    }

    /// Short enough that the commute is on foot.
    #[inline]
    pub fn is_walk_time(&self, minutes: f64) -> bool {
        minutes <= self.t_walk
    }

    /// Label of the census bucket `minutes` falls into, if any.
    pub fn bucket_for(&self, minutes: f64) -> Option<&str> {
        self.buckets
            .iter()
            .find(|b| b.contains(minutes))
            .map(|b| b.label.as_str())
    }

    /// Uniform pick from `pool`, used to replace a mode that contradicts the
    /// sampled time.
    pub fn resample_mode(&self, rng: &mut SimRng, pool: &[CommuteMode]) -> CommuteMode {
        rng.choose(pool).copied().unwrap_or(CommuteMode::Car)
    }
}

fn weighted(table: &'static str, weights: &[f64]) -> TransitResult<WeightedIndex<f64>> {
    if weights.is_empty() {
        return Err(TransitError::EmptyTable(table));
    }
    WeightedIndex::new(weights)
        .map_err(|e| TransitError::InvalidWeights { table, reason: e.to_string() })
}
