use flag_core::model::{GuessOutcome, SessionState};
use services::QuizSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertAction {
    /// Deal the next round.
    Continue,
    /// Start a new session.
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertVm {
    pub title: String,
    pub message: String,
    pub action_label: &'static str,
    pub action: AlertAction,
}

/// The dialog shown between rounds, or `None` while a guess is expected.
#[must_use]
pub fn map_alert(session: &QuizSession) -> Option<AlertVm> {
    match session.state() {
        SessionState::InProgress => None,
        SessionState::RoundComplete => {
            let title = match session.last_round().map(|record| &record.outcome) {
                Some(GuessOutcome::Incorrect { chosen, .. }) => {
                    format!("Wrong! That’s the flag of {chosen}")
                }
                Some(GuessOutcome::Correct) | None => "Correct".to_string(),
            };
            Some(AlertVm {
                title,
                message: format!("Your score is {}", session.score()),
                action_label: "Continue",
                action: AlertAction::Continue,
            })
        }
        SessionState::SessionComplete => Some(AlertVm {
            title: "Game Over".to_string(),
            message: format!("Your final score is {}", session.score()),
            action_label: "Restart",
            action: AlertAction::Restart,
        }),
    }
}
