use services::QuizSession;

use super::alert_vm::{AlertVm, map_alert};
use super::slot_vm::{FlagButtonVm, map_flag_buttons};

/// Everything the quiz screen renders, computed from a session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub target_name: String,
    pub round_label: String,
    pub score_label: String,
    pub accepts_guess: bool,
    pub buttons: Vec<FlagButtonVm>,
    pub alert: Option<AlertVm>,
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    let progress = session.progress();
    let accepts_guess = progress.state.accepts_guess();
    let round = if accepts_guess {
        progress.rounds_played + 1
    } else {
        progress.rounds_played
    };

    QuizScreenVm {
        target_name: session.target().name().to_string(),
        round_label: format!("Round {round} of {}", progress.max_rounds),
        score_label: format!("Score: {}", progress.score),
        accepts_guess,
        buttons: map_flag_buttons(session),
        alert: map_alert(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flag_core::model::QuizSettings;

    #[test]
    fn screen_tracks_round_and_score() {
        let mut session = QuizSession::seeded(
            flag_core::default_pool().unwrap(),
            QuizSettings::new(3).unwrap(),
            99,
        );

        let screen = map_quiz_screen(&session);
        assert_eq!(screen.round_label, "Round 1 of 3");
        assert_eq!(screen.score_label, "Score: 0");
        assert_eq!(screen.target_name, session.target().name());
        assert!(screen.accepts_guess);
        assert!(screen.alert.is_none());

        session.submit_guess(session.correct_slot().value()).unwrap();
        let screen = map_quiz_screen(&session);
        assert_eq!(screen.round_label, "Round 1 of 3");
        assert_eq!(screen.score_label, "Score: 1");
        assert!(!screen.accepts_guess);
        assert!(screen.alert.is_some());

        session.acknowledge_round().unwrap();
        assert_eq!(map_quiz_screen(&session).round_label, "Round 2 of 3");
    }
}
