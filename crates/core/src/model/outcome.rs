use crate::model::country::Country;

/// Result of a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    /// `chosen` is the flag the player picked, `correct` the one they were asked for.
    Incorrect { correct: Country, chosen: Country },
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}
