use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitError {
    #[error("{0} table has no rows")]
    EmptyTable(&'static str),

    #[error("invalid {table} weights: {reason}")]
    InvalidWeights { table: &'static str, reason: String },
}

pub type TransitResult<T> = Result<T, TransitError>;
