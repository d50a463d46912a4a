//! IO-layer error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("malformed input document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent base requests: {0}")]
    Build(#[from] CatalogueError),

    #[error("input document is missing the {0:?} section")]
    MissingSection(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IoResult<T> = Result<T, IoError>;
