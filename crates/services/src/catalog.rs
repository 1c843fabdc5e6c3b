//! Loading custom country catalogs from JSON.
//!
//! A catalog is a JSON array of objects:
//!
//! ```json
//! [{ "name": "France", "emoji": "🇫🇷", "description": "Three vertical stripes." }]
//! ```
//!
//! `emoji` and `description` are optional.

use std::path::Path;

use flag_core::model::{Country, ItemPool};
use serde::Deserialize;

use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: String,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    description: String,
}

/// Parse a JSON catalog into a validated pool.
///
/// # Errors
///
/// Returns `CatalogError::Json` for malformed JSON, `CatalogError::Country`
/// for blank names and `CatalogError::Pool` for duplicate or too few entries.
pub fn parse_catalog(json: &str) -> Result<ItemPool, CatalogError> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    let countries = records
        .into_iter()
        .map(|record| Country::new(record.name, record.emoji, record.description))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ItemPool::new(countries)?)
}

/// Read and parse a JSON catalog file.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, otherwise see [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<ItemPool, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pool = parse_catalog(&json)?;
    tracing::info!(path = %path.display(), countries = pool.len(), "catalog loaded");
    Ok(pool)
}
