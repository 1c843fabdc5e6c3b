use thiserror::Error;

use crate::model::{CountryError, PoolError, SettingsError, SlotIndexError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Country(#[from] CountryError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    SlotIndex(#[from] SlotIndexError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
