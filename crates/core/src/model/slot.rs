use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of flags shown per round.
pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("slot index {index} out of range (0..{slots})")]
pub struct SlotIndexError {
    pub index: usize,
    pub slots: usize,
}

/// Position of one candidate flag within a round, always in `0..SLOT_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Creates a `SlotIndex`
    ///
    /// # Errors
    ///
    /// Returns `SlotIndexError` if `index >= SLOT_COUNT`.
    pub fn new(index: usize) -> Result<Self, SlotIndexError> {
        if index < SLOT_COUNT {
            Ok(Self(index))
        } else {
            Err(SlotIndexError {
                index,
                slots: SLOT_COUNT,
            })
        }
    }

    /// Returns the underlying usize value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// Picks a slot uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..SLOT_COUNT))
    }

    /// Every slot, in display order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(SlotIndex)
    }
}

impl fmt::Debug for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotIndex({})", self.0)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = SlotIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
