//! Catalogue error type.

use thiserror::Error;

/// Errors produced while populating the catalogue.
///
/// Query methods never fail — an unknown name simply yields `None`.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("stop {0:?} already exists")]
    DuplicateStop(String),

    #[error("bus {0:?} already exists")]
    DuplicateBus(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("stop id {0} out of range")]
    StopIdOutOfRange(u32),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
