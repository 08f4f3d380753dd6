//! The age ledger: how many people of each age bracket are still to be
//! generated.
//!
//! Every agent the generator creates is accounted against exactly one
//! bracket.  When all passes are done the ledger must be empty; a bracket
//! that would go below zero means the census ratios and the requested
//! population size disagree, and generation aborts.

use crate::{CensusError, CensusResult};

// ── AgeShare ──────────────────────────────────────────────────────────────────

/// One row of a census age table: a closed age range and the percentage of
/// the population inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgeShare {
    pub min:     u8,
    pub max:     u8,
    pub percent: f64,
}

// ── AgeBracket ────────────────────────────────────────────────────────────────

/// A contiguous age range and the number of people in it still to be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeBracket {
    pub min:       u8,
    pub max:       u8,
    pub remaining: u32,
}

impl AgeBracket {
    #[inline]
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

// ── AgeLedger ─────────────────────────────────────────────────────────────────

/// Remaining-count ledger over age brackets.
///
/// Brackets keep their input order; lookups scan front to back and the first
/// bracket containing an age wins.
#[derive(Clone, Debug, Default)]
pub struct AgeLedger {
    brackets: Vec<AgeBracket>,
}

impl AgeLedger {
    /// Ledger over explicit bracket counts.
    pub fn new(brackets: Vec<AgeBracket>) -> Self {
        Self { brackets }
    }

    /// Turn census percentages into bracket counts summing to exactly `total`.
    ///
    /// Each bracket gets `floor(percent / 100 × total)`; the rounding gap is
    /// then closed one person at a time, round-robin from the first bracket.
    pub fn from_shares(shares: &[AgeShare], total: u32) -> CensusResult<Self> {
        if shares.is_empty() {
            return Err(CensusError::Empty("age distribution"));
        }
        let mut counts: Vec<u32> = shares
            .iter()
            .map(|s| (s.percent / 100.0 * total as f64).floor().max(0.0) as u32)
            .collect();
        correct_rounding(&mut counts, total);

        let brackets = shares
            .iter()
            .zip(counts)
            .map(|(s, remaining)| AgeBracket { min: s.min, max: s.max, remaining })
            .collect();
        Ok(Self { brackets })
    }

    /// Index of the bracket containing `age`.
    pub fn find_bracket(&self, age: u8) -> CensusResult<usize> {
        self.brackets
            .iter()
            .position(|b| b.contains(age))
            .ok_or(CensusError::AgeNotInLedger { age })
    }

    /// `true` if the bracket containing `age` still has people left.
    pub fn has_supply(&self, age: u8) -> CensusResult<bool> {
        let idx = self.find_bracket(age)?;
        Ok(self.brackets[idx].remaining > 0)
    }

    /// Account one person of `age` against its bracket.
    ///
    /// # Errors
    ///
    /// - [`CensusError::AgeNotInLedger`] if no bracket contains `age`.
    /// - [`CensusError::LedgerUnderflow`] if the bracket is already empty;
    ///   the ledger is left unchanged.
    pub fn deplete(&mut self, age: u8) -> CensusResult<()> {
        let idx = self.find_bracket(age)?;
        let bracket = &mut self.brackets[idx];
        if bracket.remaining == 0 {
            return Err(CensusError::LedgerUnderflow { min: bracket.min, max: bracket.max });
        }
        bracket.remaining -= 1;
        Ok(())
    }

    pub fn brackets(&self) -> &[AgeBracket] {
        &self.brackets
    }

    /// Total people still to be generated.
    pub fn total_remaining(&self) -> u64 {
        self.brackets.iter().map(|b| b.remaining as u64).sum()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.brackets.iter().all(|b| b.remaining == 0)
    }

    /// Lowest and highest age covered by any bracket.
    pub fn age_span(&self) -> Option<(u8, u8)> {
        let min = self.brackets.iter().map(|b| b.min).min()?;
        let max = self.brackets.iter().map(|b| b.max).max()?;
        Some((min, max))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Nudge floored `counts` by ±1, round-robin from index 0, until they sum to
/// `total`.  Decrements skip rows that are already zero.
pub(crate) fn correct_rounding(counts: &mut [u32], total: u32) {
    if counts.is_empty() {
        return;
    }
    let mut current: u64 = counts.iter().map(|&c| c as u64).sum();
    let target = total as u64;
    let mut idx = 0;

    while current < target {
        counts[idx] += 1;
        current += 1;
        idx = (idx + 1) % counts.len();
    }
    while current > target {
        if counts[idx] > 0 {
            counts[idx] -= 1;
            current -= 1;
        }
        idx = (idx + 1) % counts.len();
    }
}
