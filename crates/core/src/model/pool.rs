use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use thiserror::Error;

use crate::model::country::Country;
use crate::model::slot::SLOT_COUNT;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("pool needs at least {min} countries, got {len}")]
    TooFewItems { len: usize, min: usize },

    #[error("country listed more than once: {0}")]
    DuplicateName(String),
}

/// The countries a session draws its candidates from.
///
/// Membership is fixed at construction; only the order changes, and only
/// through [`ItemPool::shuffle_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPool {
    items: Vec<Country>,
}

impl ItemPool {
    /// Minimum number of countries needed to fill every slot with a distinct item.
    pub const MIN_LEN: usize = SLOT_COUNT;

    /// Builds a pool from a list of countries.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::TooFewItems` if fewer than [`ItemPool::MIN_LEN`] countries are given.
    /// Returns `PoolError::DuplicateName` if two countries share a name.
    pub fn new(items: Vec<Country>) -> Result<Self, PoolError> {
        if items.len() < Self::MIN_LEN {
            return Err(PoolError::TooFewItems {
                len: items.len(),
                min: Self::MIN_LEN,
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for country in &items {
            if !seen.insert(country.name()) {
                return Err(PoolError::DuplicateName(country.name().to_string()));
            }
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a valid pool holds at least [`ItemPool::MIN_LEN`] items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Country] {
        &self.items
    }

    /// Returns the first `n` countries in the current order (fewer if the pool is shorter).
    #[must_use]
    pub fn front(&self, n: usize) -> &[Country] {
        &self.items[..n.min(self.items.len())]
    }

    #[must_use]
    pub fn contains(&self, country: &Country) -> bool {
        self.items.contains(country)
    }

    /// Reorders the pool in place using the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
}
