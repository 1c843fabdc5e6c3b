use flag_core::model::{Country, GuessOutcome, SLOT_COUNT, SlotIndex};

/// One answered round, kept so the finished session can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    pub round: u32,
    pub candidates: [Country; SLOT_COUNT],
    pub correct_slot: SlotIndex,
    pub chosen_slot: SlotIndex,
    pub outcome: GuessOutcome,
}

impl RoundRecord {
    #[must_use]
    pub fn target(&self) -> &Country {
        &self.candidates[self.correct_slot.value()]
    }

    #[must_use]
    pub fn chosen(&self) -> &Country {
        &self.candidates[self.chosen_slot.value()]
    }
}
