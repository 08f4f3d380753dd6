use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("place inventory parse error: {0}")]
    Parse(String),

    #[error("transit route name {0:?} is not unique")]
    DuplicateRoute(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlacesResult<T> = Result<T, PlacesError>;
