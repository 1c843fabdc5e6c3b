use flag_core::model::{SessionState, SlotIndex};
use services::QuizSession;

/// Visual attributes of one flag button, derived from session state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotVisual {
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: u16,
}

impl SlotVisual {
    pub const RESTING: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 0,
    };

    /// The flag the player just tapped spins once and stays prominent.
    pub const CHOSEN: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 360,
    };

    pub const DIMMED: Self = Self {
        opacity: 0.25,
        scale: 0.9,
        rotation_deg: 0,
    };

    /// Inline CSS for the button.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}) rotateY({}deg);",
            self.opacity, self.scale, self.rotation_deg
        )
    }
}

/// Visual state of `slot` given the session state and the slot guessed this round.
#[must_use]
pub fn slot_visual(state: SessionState, chosen: Option<SlotIndex>, slot: SlotIndex) -> SlotVisual {
    match (state, chosen) {
        (SessionState::InProgress, _) | (_, None) => SlotVisual::RESTING,
        (_, Some(chosen)) if chosen == slot => SlotVisual::CHOSEN,
        (_, Some(_)) => SlotVisual::DIMMED,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlagButtonVm {
    pub slot: SlotIndex,
    pub emoji: String,
    pub name: String,
    pub accessibility_label: String,
    pub visual: SlotVisual,
}

#[must_use]
pub fn map_flag_buttons(session: &QuizSession) -> Vec<FlagButtonVm> {
    let chosen = session.last_round().map(|record| record.chosen_slot);
    SlotIndex::all()
        .zip(session.candidates().iter())
        .map(|(slot, country)| {
            let accessibility_label = if country.description().is_empty() {
                "Unknown flag".to_string()
            } else {
                country.description().to_string()
            };
            FlagButtonVm {
                slot,
                emoji: country.emoji().to_string(),
                name: country.name().to_string(),
                accessibility_label,
                visual: slot_visual(session.state(), chosen, slot),
            }
        })
        .collect()
}
