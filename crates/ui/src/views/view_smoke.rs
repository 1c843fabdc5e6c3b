use super::test_harness::{Guess, TestApp, setup_view_harness};
use crate::context::UiApp;

fn app(max_rounds: u32, guesses: Vec<Guess>) -> TestApp {
    TestApp {
        seed: 17,
        max_rounds,
        guesses,
    }
}

#[test]
fn quiz_view_smoke_renders_fresh_round() {
    let mut harness = setup_view_harness(app(8, Vec::new()));
    harness.rebuild();
    let html = harness.render();

    let session = harness.app.new_session();
    assert!(html.contains("Guess the Flag"), "missing title in {html}");
    assert!(html.contains("Tap the flag of"), "missing prompt in {html}");
    assert!(html.contains(session.target().name()), "missing target in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Round 1 of 8"), "missing round in {html}");
    for country in session.candidates() {
        assert!(html.contains(country.emoji()), "missing {country} in {html}");
        assert!(
            html.contains(country.description()),
            "missing label for {country} in {html}"
        );
    }
    assert!(!html.contains("Continue"), "unexpected alert in {html}");
}

#[test]
fn quiz_view_smoke_renders_round_alert() {
    let mut harness = setup_view_harness(app(8, vec![Guess::Right]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Correct"), "missing title in {html}");
    assert!(html.contains("Your score is 1"), "missing message in {html}");
    assert!(html.contains("Continue"), "missing action in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("opacity: 0.25"), "missing dimmed flags in {html}");
}

#[test]
fn quiz_view_smoke_renders_wrong_answer() {
    let mut harness = setup_view_harness(app(8, vec![Guess::Wrong]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Wrong! That’s the flag of"), "missing title in {html}");
    assert!(html.contains("Your score is 0"), "missing message in {html}");
}

#[test]
fn quiz_view_smoke_renders_game_over() {
    let mut harness = setup_view_harness(app(2, vec![Guess::Right, Guess::Wrong]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Game Over"), "missing title in {html}");
    assert!(html.contains("Your final score is 1"), "missing message in {html}");
    assert!(html.contains("Restart"), "missing action in {html}");
    assert!(html.contains("Round 2 of 2"), "missing round in {html}");
}
