use std::fmt;

use flag_core::model::{
    Country, GuessOutcome, ItemPool, QuizSettings, SLOT_COUNT, SessionState, SlotIndex,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::progress::QuizProgress;
use super::record::RoundRecord;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session.
///
/// Every round shuffles the pool, shows its first three countries and asks
/// for one of them. The session ends after `settings.max_rounds()` guesses
/// and stays finished until [`QuizSession::reset_session`] is called.
///
/// All randomness comes from the injected generator `R`, so a seeded
/// generator replays the same game.
pub struct QuizSession<R: Rng = StdRng> {
    pool: ItemPool,
    settings: QuizSettings,
    rng: R,
    candidates: [Country; SLOT_COUNT],
    correct_slot: SlotIndex,
    score: u32,
    rounds_played: u32,
    state: SessionState,
    history: Vec<RoundRecord>,
}

impl<R: Rng> QuizSession<R> {
    /// Create a session and deal its first round.
    #[must_use]
    pub fn new(mut pool: ItemPool, settings: QuizSettings, mut rng: R) -> Self {
        let (candidates, correct_slot) = deal_round(&mut pool, &mut rng);
        let session = Self {
            pool,
            settings,
            rng,
            candidates,
            correct_slot,
            score: 0,
            rounds_played: 0,
            state: SessionState::InProgress,
            history: Vec::new(),
        };
        session.trace_round();
        session
    }

    /// Create a session over the built-in countries with default settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` if the built-in catalog fails validation.
    pub fn with_defaults(rng: R) -> Result<Self, SessionError> {
        let pool = flag_core::default_pool()?;
        Ok(Self::new(pool, QuizSettings::default(), rng))
    }

    #[must_use]
    pub fn candidates(&self) -> &[Country; SLOT_COUNT] {
        &self.candidates
    }

    #[must_use]
    pub fn correct_slot(&self) -> SlotIndex {
        self.correct_slot
    }

    /// The country the player is asked to find this round.
    #[must_use]
    pub fn target(&self) -> &Country {
        &self.candidates[self.correct_slot.value()]
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.settings.max_rounds()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    /// Answered rounds of this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The round that was just answered, if the current round has been guessed.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        if self.state.accepts_guess() {
            None
        } else {
            self.history.last()
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            score: self.score,
            rounds_played: self.rounds_played,
            max_rounds: self.max_rounds(),
            remaining: self.max_rounds().saturating_sub(self.rounds_played),
            state: self.state,
        }
    }

    /// Shuffle the pool and deal a fresh set of candidates.
    pub fn start_round(&mut self) {
        let (candidates, correct_slot) = deal_round(&mut self.pool, &mut self.rng);
        self.candidates = candidates;
        self.correct_slot = correct_slot;
        self.state = SessionState::InProgress;
        self.trace_round();
    }

    /// Score a guess for the current round.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidArgument` if `index` is not a slot.
    /// Returns `SessionError::InvalidState` if the current round was already answered.
    pub fn submit_guess(&mut self, index: usize) -> Result<GuessOutcome, SessionError> {
        let chosen_slot = SlotIndex::new(index).map_err(|err| SessionError::InvalidArgument {
            index: err.index,
            slots: err.slots,
        })?;
        self.ensure_state(SessionState::InProgress, "submit a guess")?;

        let outcome = if chosen_slot == self.correct_slot {
            self.score += 1;
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect {
                correct: self.target().clone(),
                chosen: self.candidates[chosen_slot.value()].clone(),
            }
        };
        self.rounds_played += 1;

        self.history.push(RoundRecord {
            round: self.rounds_played,
            candidates: self.candidates.clone(),
            correct_slot: self.correct_slot,
            chosen_slot,
            outcome: outcome.clone(),
        });

        self.state = if self.rounds_played >= self.max_rounds() {
            SessionState::SessionComplete
        } else {
            SessionState::RoundComplete
        };

        tracing::debug!(
            round = self.rounds_played,
            chosen = %chosen_slot,
            correct = outcome.is_correct(),
            score = self.score,
            state = %self.state,
            "guess scored"
        );

        Ok(outcome)
    }

    /// Move on from an answered round to the next one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the session is in `RoundComplete`.
    pub fn acknowledge_round(&mut self) -> Result<(), SessionError> {
        self.ensure_state(SessionState::RoundComplete, "continue to the next round")?;
        self.start_round();
        Ok(())
    }

    /// Start over with a zero score. Valid in any state.
    pub fn reset_session(&mut self) {
        tracing::debug!(
            score = self.score,
            rounds_played = self.rounds_played,
            "session reset"
        );
        self.score = 0;
        self.rounds_played = 0;
        self.history.clear();
        self.start_round();
    }

    fn ensure_state(
        &self,
        expected: SessionState,
        operation: &'static str,
    ) -> Result<(), SessionError> {
        if self.state == expected {
            return Ok(());
        }
        tracing::warn!(%operation, state = %self.state, "operation rejected");
        Err(SessionError::InvalidState {
            operation,
            state: self.state,
        })
    }

    fn trace_round(&self) {
        tracing::debug!(
            round = self.rounds_played + 1,
            target = %self.target(),
            correct_slot = %self.correct_slot,
            "round started"
        );
    }
}

impl QuizSession<StdRng> {
    /// Create a session whose rounds are reproducible from `seed`.
    #[must_use]
    pub fn seeded(pool: ItemPool, settings: QuizSettings, seed: u64) -> Self {
        Self::new(pool, settings, StdRng::seed_from_u64(seed))
    }

    /// Create a session seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy(pool: ItemPool, settings: QuizSettings) -> Self {
        Self::new(pool, settings, StdRng::from_os_rng())
    }
}

fn deal_round<R: Rng + ?Sized>(
    pool: &mut ItemPool,
    rng: &mut R,
) -> ([Country; SLOT_COUNT], SlotIndex) {
    pool.shuffle_with(rng);
    let front = pool.front(SLOT_COUNT);
    let candidates = std::array::from_fn(|i| front[i].clone());
    (candidates, SlotIndex::random(rng))
}

impl<R: Rng> fmt::Debug for QuizSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("pool_len", &self.pool.len())
            .field("candidates", &self.candidates)
            .field("correct_slot", &self.correct_slot)
            .field("score", &self.score)
            .field("rounds_played", &self.rounds_played)
            .field("max_rounds", &self.max_rounds())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
