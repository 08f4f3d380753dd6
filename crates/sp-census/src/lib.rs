//! `sp-census` — population-level statistics the generator has to match.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`ledger`]   | `AgeBracket`, `AgeShare`, `AgeLedger` (remaining people per age bracket) |
//! | [`tables`]   | `WeightedTable<K>`, `TimeBucket`, `HouseholdSizeTable`, `OccupationStats`, `OccupationMap` |
//! | [`loader`]   | CSV readers for every table, `CensusTables` bundle            |
//! | [`error`]    | `CensusError`, `CensusResult<T>`                              |
//!
//! # Rounding model
//!
//! Census inputs are percentages.  Every table that is turned into integer
//! counts (age brackets, household sizes) floors each share and then hands
//! out the difference one unit at a time, round-robin from the first row, so
//! the counts always sum to the requested total.

pub mod error;
pub mod ledger;
pub mod loader;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::{CensusError, CensusResult};
pub use ledger::{AgeBracket, AgeLedger, AgeShare};
pub use loader::{
    CensusTables, load_age_shares, load_carpool_sizes, load_household_sizes,
    load_occupation_map, load_occupation_stats, load_travel_modes, load_travel_times,
};
pub use tables::{
    HouseholdSizeTable, OccupationCensus, OccupationMap, OccupationStats, TimeBucket,
    WeightedTable,
};
