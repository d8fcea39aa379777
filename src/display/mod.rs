//! Text rendering shared by the front-ends.
//!
//! Pure functions from session values to display strings, so the wording
//! stays identical across the terminal driver and the Python bindings.

use crate::core::GameRng;
use crate::session::{Achievements, MatchRules, MatchStatus, Round, RoundRecord, Score, Streaks};

/// Message shown before the first round.
pub const WELCOME: &str = "Choose your move to begin!";

/// Headline for a played round.
///
/// ```
/// use rust_rps::core::Choice;
/// use rust_rps::display::status_message;
/// use rust_rps::session::Round;
///
/// let round = Round::new(Choice::Paper, Choice::Paper);
/// assert_eq!(status_message(&round), "Tie. You both picked Paper 📄.");
/// ```
pub fn status_message(round: &Round) -> String {
    match round.winning_choice() {
        Some(winner) => format!(
            "{} {} beats {}.",
            if round.outcome().is_player_win() { "You WIN!" } else { "You LOSE." },
            winner.glyph(),
            winner.beats().glyph()
        ),
        None => format!(
            "Tie. You both picked {} {}.",
            round.player(),
            round.player().glyph()
        ),
    }
}

/// One-line scoreboard.
pub fn scoreboard(score: &Score, rules: &MatchRules) -> String {
    format!(
        "Rounds: {} | You: {} | Computer: {} | Ties: {} | Win rate: {:.0}% | Target wins: {}",
        score.total(),
        score.player_wins,
        score.computer_wins,
        score.ties,
        score.win_rate() * 100.0,
        rules.target_wins()
    )
}

/// Streaks and unlocked badges.
pub fn streak_line(streaks: &Streaks, achievements: &Achievements) -> String {
    format!(
        "Current streak: {:+} | Your best: {} | CPU best: {} | {}",
        streaks.current,
        streaks.best_player,
        streaks.best_computer,
        badges(achievements)
    )
}

/// "Badges: ..." label, or a dash when nothing is unlocked.
pub fn badges(achievements: &Achievements) -> String {
    if achievements.is_empty() {
        return "Badges: —".to_owned();
    }
    let titles: Vec<&str> = achievements.iter().map(|a| a.title()).collect();
    format!("Badges: {}", titles.join(", "))
}

/// A line in the recent-rounds list.
pub fn history_line(record: &RoundRecord) -> String {
    format!(
        "[{}] You: {} {}  |  CPU: {} {}  → {}",
        record.played_at.format("%H:%M:%S"),
        record.player,
        record.player.glyph(),
        record.computer,
        record.computer.glyph(),
        record.outcome
    )
}

/// Announcement for a decided match, `None` while it is in progress.
pub fn match_message(status: MatchStatus, score: &Score) -> Option<String> {
    let winner = match status {
        MatchStatus::InProgress => return None,
        MatchStatus::PlayerWon => "You",
        MatchStatus::ComputerWon => "Computer",
    };
    Some(format!(
        "{} won the match!\n\nScore: You {} – {} CPU",
        winner, score.player_wins, score.computer_wins
    ))
}

/// Announcement for a fresh match.
pub fn new_match_message(rules: &MatchRules) -> String {
    format!(
        "New match started: best of {} (first to {}).",
        rules.best_of(),
        rules.target_wins()
    )
}

const CONFETTI: [char; 6] = ['*', '•', '+', 'o', '~', '°'];

/// Text confetti: `rows` lines of `width` cells, roughly one cell in six
/// filled.
pub fn confetti(rng: &mut GameRng, width: usize, rows: usize) -> String {
    let mut out = String::with_capacity((width + 1) * rows);
    for row in 0..rows {
        if row > 0 {
            out.push('\n');
        }
        for _ in 0..width {
            if rng.gen_bool(1.0 / 6.0) {
                out.push(*rng.choose(&CONFETTI).unwrap_or(&'*'));
            } else {
                out.push(' ');
            }
        }
    }
    out
}
