#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{default_countries, default_pool};
pub use error::Error;
