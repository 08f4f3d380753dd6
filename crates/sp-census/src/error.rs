use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    /// No bracket covers `age`: the census brackets do not span `[0, max_age]`.
    #[error("age {age} is not covered by any age bracket")]
    AgeNotInLedger { age: u8 },

    /// A bracket was asked for one more person than it holds.  Signals that
    /// the census ratios do not fit the requested population size.
    #[error("age bracket {min}-{max} has no people left to assign")]
    LedgerUnderflow { min: u8, max: u8 },

    #[error("{0} table has no rows")]
    Empty(&'static str),

    #[error("invalid sampling weights: {0}")]
    InvalidWeights(String),

    #[error("census parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CensusResult<T> = Result<T, CensusError>;
