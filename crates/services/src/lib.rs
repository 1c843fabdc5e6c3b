#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod quiz;

pub use catalog::{load_catalog, parse_catalog};
pub use error::{CatalogError, SessionError};
pub use quiz::{QuizProgress, QuizSession, RoundRecord};
