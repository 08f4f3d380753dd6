//! In-memory census distribution tables.

use rand::distributions::{Distribution, WeightedIndex};
use rustc_hash::FxHashMap;

use sp_core::SimRng;

use crate::ledger::correct_rounding;
use crate::{CensusError, CensusResult};

// ── WeightedTable ─────────────────────────────────────────────────────────────

/// A categorical distribution: values with non-negative relative weights.
///
/// Weights need not sum to one; sampling is with replacement.
#[derive(Clone, Debug)]
pub struct WeightedTable<K> {
    values:  Vec<K>,
    weights: Vec<f64>,
}

impl<K: Clone> WeightedTable<K> {
    pub fn new(rows: Vec<(K, f64)>) -> Self {
        let (values, weights) = rows.into_iter().unzip();
        Self { values, weights }
    }

    pub fn values(&self) -> &[K] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draw `n` values independently according to the weights.
    ///
    /// # Errors
    ///
    /// [`CensusError::InvalidWeights`] if the table is empty, a weight is
    /// negative or NaN, or all weights are zero.
    pub fn sample_n(&self, rng: &mut SimRng, n: usize) -> CensusResult<Vec<K>> {
        let dist = WeightedIndex::new(&self.weights)
            .map_err(|e| CensusError::InvalidWeights(e.to_string()))?;
        Ok((0..n)
            .map(|_| self.values[dist.sample(rng.inner())].clone())
            .collect())
    }
}

// ── TimeBucket ────────────────────────────────────────────────────────────────

/// A census travel-time interval, e.g. `"10-14"` or the open-ended `"90+"`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeBucket {
    pub label: String,
    pub lower: f64,
    /// `None` for an open-ended bucket.
    pub upper: Option<f64>,
}

impl TimeBucket {
    /// Parse `"a-b"` or `"a+"`.
    pub fn parse(label: &str) -> CensusResult<Self> {
        let label = label.trim();
        let bad = || CensusError::Parse(format!("invalid travel time bucket {label:?}"));

        if let Some(lower) = label.strip_suffix('+') {
            let lower = lower.trim().parse::<f64>().map_err(|_| bad())?;
            return Ok(Self { label: label.to_owned(), lower, upper: None });
        }
        let (lo, hi) = label.split_once('-').ok_or_else(bad)?;
        let lower = lo.trim().parse::<f64>().map_err(|_| bad())?;
        let upper = hi.trim().parse::<f64>().map_err(|_| bad())?;
        if upper < lower {
            return Err(bad());
        }
        Ok(Self { label: label.to_owned(), lower, upper: Some(upper) })
    }

    /// The single travel time standing in for the whole bucket: the midpoint,
    /// or the lower bound of an open-ended bucket.
    pub fn representative(&self) -> f64 {
        match self.upper {
            Some(upper) => self.lower + (upper - self.lower) * 0.5,
            None => self.lower,
        }
    }

    pub fn contains(&self, minutes: f64) -> bool {
        match self.upper {
            Some(upper) => minutes >= self.lower && minutes <= upper,
            None => minutes >= self.lower,
        }
    }
}

// ── HouseholdSizeTable ────────────────────────────────────────────────────────

/// Share of households with 1, 2, 3 and 4+ members.
#[derive(Clone, Debug, PartialEq)]
pub struct HouseholdSizeTable {
    /// Fractions for sizes 1..=4, in that order.
    pub shares: [f64; 4],
}

impl HouseholdSizeTable {
    /// Number of households of each size out of `total`, summing exactly to
    /// `total`.  Index 0 is size 1, index 3 is size 4+.
    pub fn allocate(&self, total: u32) -> [u32; 4] {
        let mut counts = self.shares.map(|s| (s * total as f64).floor().max(0.0) as u32);
        correct_rounding(&mut counts, total);
        counts
    }
}

// ── Occupations ───────────────────────────────────────────────────────────────

/// Census count and share of one occupation category.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupationCensus {
    pub occupation: String,
    pub count:      u32,
    pub percent:    f64,
}

/// Census occupation marginals, in input order.
#[derive(Clone, Debug, Default)]
pub struct OccupationStats {
    pub rows: Vec<OccupationCensus>,
}

impl OccupationStats {
    pub fn get(&self, occupation: &str) -> Option<&OccupationCensus> {
        self.rows.iter().find(|r| r.occupation == occupation)
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count as u64).sum()
    }
}

/// Maps a workplace's occupation category to the occupation label agents
/// working there receive.
#[derive(Clone, Debug, Default)]
pub struct OccupationMap {
    map: FxHashMap<String, String>,
}

impl OccupationMap {
    /// Marker meaning "the category already is the occupation".
    pub const PASSTHROUGH: &'static str = "None";

    /// Build from `(category, occupation)` pairs; later pairs win.
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { map: entries.into_iter().collect() }
    }

    pub fn insert(&mut self, category: impl Into<String>, occupation: impl Into<String>) {
        self.map.insert(category.into(), occupation.into());
    }

    /// Occupation for workers of `category`.  Unmapped categories and
    /// passthrough entries resolve to the category itself.
    pub fn resolve<'a>(&'a self, category: &'a str) -> &'a str {
        match self.map.get(category) {
            Some(occ) if occ != Self::PASSTHROUGH => occ,
            _ => category,
        }
    }
}
