//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use flag_core::model::{CountryError, PoolError, SessionState};

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("guess index {index} out of range (0..{slots})")]
    InvalidArgument { index: usize, slots: usize },
    #[error("cannot {operation} while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
    #[error(transparent)]
    Core(#[from] flag_core::Error),
}

/// Errors emitted while loading a country catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Country(#[from] CountryError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}
