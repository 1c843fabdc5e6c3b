//! Built-in country list.

use crate::model::{Country, CountryError, ItemPool};

const DEFAULT_CATALOG: &[(&str, &str, &str)] = &[
    (
        "Estonia",
        "🇪🇪",
        "Flag with three horizontal stripes. Top stripe blue, middle stripe black, bottom stripe white.",
    ),
    (
        "France",
        "🇫🇷",
        "Flag with three vertical stripes. Left stripe blue, middle stripe white, right stripe red.",
    ),
    (
        "Germany",
        "🇩🇪",
        "Flag with three horizontal stripes. Top stripe black, middle stripe red, bottom stripe gold.",
    ),
    (
        "Ireland",
        "🇮🇪",
        "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe orange.",
    ),
    (
        "Italy",
        "🇮🇹",
        "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe red.",
    ),
    (
        "Nigeria",
        "🇳🇬",
        "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe green.",
    ),
    (
        "Poland",
        "🇵🇱",
        "Flag with two horizontal stripes. Top stripe white, bottom stripe red.",
    ),
    (
        "Spain",
        "🇪🇸",
        "Flag with three horizontal stripes. Top thin stripe red, middle thick stripe gold with a crest on the left, bottom thin stripe red.",
    ),
    (
        "UK",
        "🇬🇧",
        "Flag with overlapping red and white crosses, both straight and diagonally, on a blue background.",
    ),
    (
        "Ukraine",
        "🇺🇦",
        "Flag with two horizontal stripes. Top stripe blue, bottom stripe yellow.",
    ),
    (
        "US",
        "🇺🇸",
        "Flag with many red and white stripes, with white stars on a blue background in the top-left corner.",
    ),
];

/// The countries shipped with the game, in alphabetical order.
///
/// # Errors
///
/// Returns `CountryError` if a built-in entry is malformed.
pub fn default_countries() -> Result<Vec<Country>, CountryError> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, emoji, description)| Country::new(*name, *emoji, *description))
        .collect()
}

/// The built-in countries as a ready-to-use pool.
///
/// # Errors
///
/// Returns `crate::Error` if the built-in list fails validation.
pub fn default_pool() -> Result<ItemPool, crate::Error> {
    Ok(ItemPool::new(default_countries()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_has_all_countries() {
        let pool = default_pool().unwrap();
        assert_eq!(pool.len(), 11);
        let names: Vec<_> = pool.items().iter().map(Country::name).collect();
        assert_eq!(names.first(), Some(&"Estonia"));
        assert_eq!(names.last(), Some(&"US"));
    }

    #[test]
    fn every_default_country_has_a_description() {
        for country in default_countries().unwrap() {
            assert!(!country.description().is_empty(), "{country} has no label");
            assert!(!country.emoji().is_empty(), "{country} has no flag");
        }
    }
}
