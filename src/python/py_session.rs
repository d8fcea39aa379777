//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::SessionConfig;
use crate::display;
use crate::export;
use crate::session::{GameSession, MatchStatus};

use super::py_core::{parse_choice, to_py_err, PyRound, PyTurn};

/// Python wrapper for GameSession.
///
/// One per window; the UI thread owns it.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed, or None to seed from OS entropy
    /// - best_of: Match length (odd, 1-21; even values round up)
    /// - history_limit: Cap on rounds kept for export, or None for every round
    /// - celebrate: Whether turns report win celebrations
    #[new]
    #[pyo3(signature = (seed = None, best_of = 5, history_limit = None, celebrate = true))]
    fn new(
        seed: Option<u64>,
        best_of: u32,
        history_limit: Option<usize>,
        celebrate: bool,
    ) -> PyResult<Self> {
        let config = SessionConfig {
            seed,
            best_of,
            record_history: true,
            history_limit,
            celebrate,
        };
        let inner = GameSession::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Play one round with a named choice ("rock", "Paper", "s", ...).
    ///
    /// Raises ValueError for anything else; the score is left unchanged.
    fn play(&mut self, choice: &str) -> PyResult<PyTurn> {
        let choice = parse_choice(choice)?;
        Ok(PyTurn(self.inner.play_turn(choice)))
    }

    /// Zero the score and current streak.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Start a new match. Returns the announcement text.
    fn new_match(&mut self) -> String {
        self.inner.new_match();
        display::new_match_message(&self.inner.match_rules())
    }

    /// Change the match length.
    fn set_best_of(&mut self, best_of: u32) -> PyResult<()> {
        self.inner.set_best_of(best_of).map_err(to_py_err)
    }

    /// Current score as (player_wins, computer_wins, ties).
    #[getter]
    fn score(&self) -> (u32, u32, u32) {
        self.inner.current_score().as_tuple()
    }

    #[getter]
    fn last_round(&self) -> Option<PyRound> {
        self.inner.last_round().map(PyRound)
    }

    /// (current, best_player, best_computer)
    #[getter]
    fn streak(&self) -> (i32, u32, u32) {
        let s = self.inner.streaks();
        (s.current, s.best_player, s.best_computer)
    }

    #[getter]
    fn achievements(&self) -> Vec<&'static str> {
        self.inner.achievements().iter().map(|a| a.title()).collect()
    }

    /// "in_progress", "player_won" or "computer_won".
    #[getter]
    fn match_status(&self) -> &'static str {
        match self.inner.match_status() {
            MatchStatus::InProgress => "in_progress",
            MatchStatus::PlayerWon => "player_won",
            MatchStatus::ComputerWon => "computer_won",
        }
    }

    #[getter]
    fn target_wins(&self) -> u32 {
        self.inner.match_rules().target_wins()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    /// The newest `n` history lines, newest first.
    #[pyo3(signature = (n = 10))]
    fn recent(&self, n: usize) -> Vec<String> {
        self.inner
            .history()
            .recent(n)
            .map(display::history_line)
            .collect()
    }

    /// Write the round log to a CSV file. Returns rows written.
    fn export_csv(&self, path: &str) -> PyResult<usize> {
        export::export_csv(self.inner.history(), path).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let (p, c, t) = self.inner.current_score().as_tuple();
        format!("GameSession(score=({}, {}, {}), seed={})", p, c, t, self.inner.seed())
    }
}
