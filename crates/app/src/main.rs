use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flag_core::model::{GuessOutcome, ItemPool, QuizSettings, SessionState};
use services::{QuizSession, SessionError, load_catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidRounds { raw: String },
    InvalidSeed { raw: String },
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidRounds { raw } => write!(f, "invalid --rounds value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    pool: ItemPool,
    settings: QuizSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn new_session(&self) -> QuizSession {
        new_session(self.pool.clone(), self.settings, self.seed)
    }
}

fn new_session(pool: ItemPool, settings: QuizSettings, seed: Option<u64>) -> QuizSession {
    match seed {
        Some(seed) => QuizSession::seeded(pool, settings, seed),
        None => QuizSession::from_entropy(pool, settings),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  guess-the-flag [ui]  [--rounds <n>] [--seed <u64>] [--catalog <path>]");
    eprintln!("  guess-the-flag cli   [--rounds <n>] [--seed <u64>] [--catalog <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --rounds 8");
    eprintln!("  --seed   (random)");
    eprintln!("  --catalog (built-in countries)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAG_QUIZ_ROUNDS, FLAG_QUIZ_SEED, FLAG_QUIZ_CATALOG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Cli,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "cli" => Some(Self::Cli),
            _ => None,
        }
    }

    /// Picks the command from the first argument; the window is the default.
    fn select(first: Option<&str>) -> Result<Self, ArgsError> {
        match first {
            None => Ok(Self::Ui),
            Some(first) if first.starts_with("--") => Ok(Self::Ui),
            Some(first) => {
                Self::from_arg(first).ok_or_else(|| ArgsError::UnknownSubcommand(first.to_string()))
            }
        }
    }
}

#[derive(Debug)]
struct Args {
    settings: QuizSettings,
    seed: Option<u64>,
    catalog: Option<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut settings = std::env::var("FLAG_QUIZ_ROUNDS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .and_then(|rounds| QuizSettings::new(rounds).ok())
            .unwrap_or_default();
        let mut seed = std::env::var("FLAG_QUIZ_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());
        let mut catalog = std::env::var("FLAG_QUIZ_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rounds" => {
                    let value = require_value(args, "--rounds")?;
                    settings = value
                        .parse::<u32>()
                        .ok()
                        .and_then(|rounds| QuizSettings::new(rounds).ok())
                        .ok_or(ArgsError::InvalidRounds { raw: value })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    catalog = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            settings,
            seed,
            catalog,
        })
    }

    fn pool(&self) -> Result<ItemPool, Box<dyn std::error::Error>> {
        match self.catalog.as_deref() {
            Some(path) => Ok(load_catalog(path)?),
            None => Ok(flag_core::default_pool()?),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    if matches!(argv.first().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }
    let cmd = Command::select(argv.first().map(String::as_str))?;

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter())?;
    let pool = parsed.pool()?;
    tracing::info!(
        command = ?cmd,
        countries = pool.len(),
        max_rounds = parsed.settings.max_rounds(),
        seed = ?parsed.seed,
        "starting quiz"
    );

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                pool,
                settings: parsed.settings,
                seed: parsed.seed,
            });
            let context = build_app_context(&app);

            // Some dev setups default Dioxus/tao windows to always-on-top; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Guess the Flag")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Cli => {
            let session = new_session(pool, parsed.settings, parsed.seed);
            let stdin = io::stdin();
            play_in_terminal(session, stdin.lock(), io::stdout().lock())
        }
    }
}

/// Plays the quiz over line-based input, one slot number (1-3) per line.
///
/// `q` quits; end of input ends the game quietly.
fn play_in_terminal(
    mut session: QuizSession,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = input.lines();

    loop {
        match session.state() {
            SessionState::InProgress => {
                writeln!(
                    out,
                    "\nRound {} of {}. Tap the flag of {}",
                    session.rounds_played() + 1,
                    session.max_rounds(),
                    session.target()
                )?;
                for (i, country) in session.candidates().iter().enumerate() {
                    writeln!(out, "  {}) {}", i + 1, country.emoji())?;
                }
                write!(out, "> ")?;
                out.flush()?;

                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                let Some(index) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
                else {
                    writeln!(out, "Enter 1, 2 or 3 (q to quit).")?;
                    continue;
                };

                match session.submit_guess(index) {
                    Ok(GuessOutcome::Correct) => {
                        writeln!(out, "Correct! Your score is {}", session.score())?;
                    }
                    Ok(GuessOutcome::Incorrect { correct, chosen }) => {
                        writeln!(
                            out,
                            "Wrong! That’s the flag of {chosen}. {correct} was {}. Your score is {}",
                            correct.emoji(),
                            session.score()
                        )?;
                    }
                    Err(SessionError::InvalidArgument { .. }) => {
                        writeln!(out, "Enter 1, 2 or 3 (q to quit).")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            SessionState::RoundComplete => session.acknowledge_round()?,
            SessionState::SessionComplete => {
                writeln!(
                    out,
                    "\nGame Over. Your final score is {} of {}",
                    session.score(),
                    session.max_rounds()
                )?;
                write!(out, "Play again? [y/N] ")?;
                out.flush()?;

                let again = lines
                    .next()
                    .transpose()?
                    .is_some_and(|line| line.trim().eq_ignore_ascii_case("y"));
                if !again {
                    return Ok(());
                }
                session.reset_session();
            }
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        if err.is::<ArgsError>() {
            print_usage();
        }
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(&mut list.iter().map(|s| (*s).to_string()))
    }

    fn session(rounds: u32) -> QuizSession {
        QuizSession::seeded(
            flag_core::default_pool().unwrap(),
            QuizSettings::new(rounds).unwrap(),
            4,
        )
    }

    #[test]
    fn parses_flags() {
        let parsed = args(&["--rounds", "3", "--seed", "42", "--catalog", "flags.json"]).unwrap();
        assert_eq!(parsed.settings.max_rounds(), 3);
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.catalog, Some(PathBuf::from("flags.json")));
    }

    #[test]
    fn rejects_zero_rounds() {
        let err = args(&["--rounds", "0"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidRounds { raw } if raw == "0"));
    }

    #[test]
    fn rejects_missing_value_and_unknown_flag() {
        assert!(matches!(
            args(&["--seed"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--seed" }
        ));
        assert!(matches!(
            args(&["--colour"]).unwrap_err(),
            ArgsError::UnknownArg(arg) if arg == "--colour"
        ));
    }

    #[test]
    fn unknown_subcommand_is_an_args_error() {
        let err = Command::select(Some("bogus")).unwrap_err();
        assert!(matches!(&err, ArgsError::UnknownSubcommand(cmd) if cmd == "bogus"));
        assert_eq!(err.to_string(), "unknown subcommand: bogus");

        assert_eq!(Command::select(None).unwrap(), Command::Ui);
        assert_eq!(Command::select(Some("--seed")).unwrap(), Command::Ui);
        assert_eq!(Command::select(Some("cli")).unwrap(), Command::Cli);
    }

    #[test]
    fn terminal_game_plays_to_the_end() {
        let probe = session(2);
        let first = probe.correct_slot().value() + 1;
        let input = format!("{first}\n9\nx\n1\nn\n");
        let mut out = Vec::new();

        play_in_terminal(session(2), input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Round 1 of 2"), "{text}");
        assert!(text.contains("Correct! Your score is 1"), "{text}");
        assert!(text.contains("Enter 1, 2 or 3"), "{text}");
        assert!(text.contains("Round 2 of 2"), "{text}");
        assert!(text.contains("Game Over. Your final score is"), "{text}");
    }

    #[test]
    fn terminal_game_quits_on_q() {
        let mut out = Vec::new();
        play_in_terminal(session(8), "q\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Round 1 of 8"));
        assert!(!text.contains("Game Over"));
    }
}
