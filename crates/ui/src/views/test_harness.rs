use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flag_core::model::QuizSettings;
use services::QuizSession;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

/// Deals a seeded session and plays `guesses` rounds before handing it to the view.
#[derive(Clone)]
pub struct TestApp {
    pub seed: u64,
    pub max_rounds: u32,
    pub guesses: Vec<Guess>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess {
    Right,
    Wrong,
}

impl UiApp for TestApp {
    fn new_session(&self) -> QuizSession {
        let pool = flag_core::default_pool().expect("default pool");
        let settings = QuizSettings::new(self.max_rounds).expect("settings");
        let mut session = QuizSession::seeded(pool, settings, self.seed);
        for (i, guess) in self.guesses.iter().enumerate() {
            if i > 0 {
                session.acknowledge_round().expect("acknowledge");
            }
            let correct = session.correct_slot().value();
            let index = match guess {
                Guess::Right => correct,
                Guess::Wrong => (correct + 1) % 3,
            };
            session.submit_guess(index).expect("guess");
        }
        session
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(app: TestApp) -> ViewHarness {
    let app = Arc::new(app);
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::clone(&app),
        },
    );
    ViewHarness { dom, app }
}
