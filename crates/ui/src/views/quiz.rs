use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{AlertAction, map_quiz_screen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(move || ctx.new_session());
    let screen = map_quiz_screen(&session.read());

    let accepts_guess = screen.accepts_guess;
    let flag_buttons = screen.buttons.iter().map(|button| {
        let mut session = session;
        let index = button.slot.value();
        rsx! {
            button {
                key: "{index}",
                class: "flag-button",
                r#type: "button",
                disabled: !accepts_guess,
                style: "{button.visual.style()}",
                aria_label: "{button.accessibility_label}",
                onclick: move |_| {
                    if let Err(err) = session.write().submit_guess(index) {
                        tracing::warn!(%err, index, "guess rejected");
                    }
                },
                span { class: "flag-emoji", "{button.emoji}" }
            }
        }
    });

    let alert = screen.alert.as_ref().map(|alert| {
        let mut session = session;
        let action = alert.action;
        rsx! {
            div { class: "alert-backdrop",
                div { class: "alert", role: "alertdialog",
                    h3 { class: "alert-title", "{alert.title}" }
                    p { class: "alert-message", "{alert.message}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| match action {
                            AlertAction::Continue => {
                                if let Err(err) = session.write().acknowledge_round() {
                                    tracing::warn!(%err, "continue rejected");
                                }
                            }
                            AlertAction::Restart => session.write().reset_session(),
                        },
                        "{alert.action_label}"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            h1 { class: "quiz-title", "Guess the Flag" }
            div { class: "quiz-card",
                div { class: "quiz-prompt",
                    p { class: "quiz-prompt-label", "Tap the flag of" }
                    h2 { class: "quiz-target", "{screen.target_name}" }
                }
                div { class: "quiz-flags", {flag_buttons} }
            }
            p { class: "quiz-round", "{screen.round_label}" }
            p { class: "quiz-score", "{screen.score_label}" }
            {alert}
        }
    }
}
