//! Persistence error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("archive is inconsistent: {0}")]
    Restore(#[from] CatalogueError),
}

pub type PersistResult<T> = Result<T, PersistError>;
