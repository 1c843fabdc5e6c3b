mod country;
mod outcome;
mod pool;
mod settings;
mod slot;
mod state;

pub use country::{Country, CountryError};
pub use outcome::GuessOutcome;
pub use pool::{ItemPool, PoolError};
pub use settings::{QuizSettings, SettingsError};
pub use slot::{SLOT_COUNT, SlotIndex, SlotIndexError};
pub use state::SessionState;
