use std::fmt;

/// Where a session sits in its round cycle.
///
/// `InProgress` accepts a guess; `RoundComplete` waits for the player to
/// continue; `SessionComplete` waits for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    RoundComplete,
    SessionComplete,
}

impl SessionState {
    #[must_use]
    pub fn accepts_guess(self) -> bool {
        matches!(self, SessionState::InProgress)
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, SessionState::SessionComplete)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::InProgress => "in progress",
            SessionState::RoundComplete => "round complete",
            SessionState::SessionComplete => "session complete",
        };
        f.write_str(label)
    }
}
