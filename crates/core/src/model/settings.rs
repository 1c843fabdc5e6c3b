use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("max rounds must be > 0")]
    InvalidMaxRounds,
}

/// Per-session knobs.
///
/// Deserialization goes through [`QuizSettings::new`], so a decoded value is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizSettings")]
pub struct QuizSettings {
    max_rounds: u32,
}

impl QuizSettings {
    pub const DEFAULT_MAX_ROUNDS: u32 = 8;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidMaxRounds` when `max_rounds` is zero.
    pub fn new(max_rounds: u32) -> Result<Self, SettingsError> {
        if max_rounds == 0 {
            return Err(SettingsError::InvalidMaxRounds);
        }
        Ok(Self { max_rounds })
    }

    /// Rounds played before the session is over.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}

#[derive(Deserialize)]
struct RawQuizSettings {
    max_rounds: u32,
}

impl TryFrom<RawQuizSettings> for QuizSettings {
    type Error = SettingsError;

    fn try_from(raw: RawQuizSettings) -> Result<Self, Self::Error> {
        Self::new(raw.max_rounds)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }
}
