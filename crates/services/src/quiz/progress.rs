use flag_core::model::SessionState;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub score: u32,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub remaining: u32,
    pub state: SessionState,
}
