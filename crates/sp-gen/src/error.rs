use sp_census::CensusError;
use sp_core::CoreError;
use sp_transit::TransitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("generation configuration error: {0}")]
    Config(String),

    /// Ledger lookup or depletion failed: the census tables do not fit the
    /// requested population.
    #[error("age ledger error: {0}")]
    Census(#[from] CensusError),

    #[error("commute table error: {0}")]
    Transit(#[from] TransitError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{heads} household heads but only {available} occupied households")]
    NoHouseholdsForHeads { heads: u64, available: usize },

    #[error("no household of size 4 or more can absorb the remaining agents")]
    NoBackfillHousehold,

    #[error("no household size slot left for a household head")]
    NoHouseholdSizeSlot,

    /// A resample-until-accepted loop hit `max_resample_attempts`.
    #[error("gave up sampling {0} after the maximum number of attempts")]
    SamplingExhausted(&'static str),
}

pub type GenResult<T> = Result<T, GenError>;
