use std::sync::Arc;

use services::QuizSession;

/// Implemented by the composition root (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    /// A freshly dealt session. Called once per mounted quiz view.
    fn new_session(&self) -> QuizSession;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        self.app.new_session()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
