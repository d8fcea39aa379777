//! Terminal front-end.
//!
//! Keys (one per line): r/p/s to play, n new match, h history,
//! e export CSV, q quit. Full names ("rock") also work.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use log::{debug, LevelFilter};

use rust_rps::core::{GameRng, Result, SessionConfig};
use rust_rps::display;
use rust_rps::export;
use rust_rps::session::GameSession;

/// Lines shown by the `h` command.
const RECENT_LINES: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Rock-Paper-Scissors against the computer")]
struct Args {
    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for the computer's draws
    #[arg(long)]
    seed: Option<u64>,

    /// Match length (odd, 1-21)
    #[arg(short, long)]
    best_of: Option<u32>,

    /// Cap on rounds kept for CSV export [default: every round]
    #[arg(long)]
    history_limit: Option<usize>,

    /// Skip the confetti on wins
    #[arg(long)]
    no_celebrate: bool,

    /// Write the round log here on exit
    #[arg(long)]
    export: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_toml_file(path)?,
            None => SessionConfig::default().with_history(true),
        };
        if let Some(limit) = self.history_limit {
            config = config.with_history_limit(limit);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(best_of) = self.best_of {
            config = config.with_best_of(best_of);
        }
        if self.no_celebrate {
            config = config.with_celebrate(false);
        }
        config.validate()
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.session_config()?;
    debug!("config: {:?}", config);

    let mut session = GameSession::new(config)?;
    let mut confetti_rng = GameRng::new(session.seed()).for_context("confetti");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", display::new_match_message(&session.match_rules()))?;
    writeln!(out, "{}", display::WELCOME)?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_match();
                writeln!(out, "{}", display::new_match_message(&session.match_rules()))?;
            }
            "h" | "history" => {
                if session.history().is_empty() {
                    writeln!(out, "No rounds played yet.")?;
                }
                for record in session.history().recent(RECENT_LINES) {
                    writeln!(out, "  {}", display::history_line(record))?;
                }
            }
            "e" | "export" => {
                let path = args
                    .export
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(export::default_file_name(Utc::now())));
                match export::export_csv(session.history(), &path) {
                    Ok(rows) => writeln!(out, "Saved {} rounds to {}", rows, path.display())?,
                    Err(err) => writeln!(out, "Export failed: {}", err)?,
                }
            }
            other => match other.parse() {
                Ok(choice) => {
                    let turn = session.play_turn(choice);

                    if turn.celebrate {
                        writeln!(out, "{}", display::confetti(&mut confetti_rng, 48, 2))?;
                    }
                    writeln!(
                        out,
                        "You: {}  CPU: {}",
                        turn.round.player(),
                        turn.round.computer()
                    )?;
                    writeln!(out, "{}", display::status_message(&turn.round))?;
                    for achievement in &turn.unlocked {
                        writeln!(out, "Achievement unlocked! {}", achievement)?;
                    }
                    writeln!(out, "{}", display::scoreboard(&turn.score, &session.match_rules()))?;
                    writeln!(
                        out,
                        "{}",
                        display::streak_line(&turn.streaks, session.achievements())
                    )?;

                    if let Some(message) = display::match_message(turn.match_status, &turn.score) {
                        writeln!(out, "\n{}\n", message)?;
                        session.new_match();
                        writeln!(out, "{}", display::new_match_message(&session.match_rules()))?;
                    }
                }
                Err(err) => writeln!(out, "{} (keys: r, p, s, n, h, e, q)", err)?,
            },
        }

        prompt(&mut out)?;
    }

    if let Some(path) = &args.export {
        if !session.history().is_empty() {
            let rows = export::export_csv(session.history(), path)?;
            writeln!(out, "Saved {} rounds to {}", rows, path.display())?;
        }
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
