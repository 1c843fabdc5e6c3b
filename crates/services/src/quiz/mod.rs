mod progress;
mod record;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use record::RoundRecord;
pub use service::QuizSession;
