//! Core type bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Choice, Outcome, RpsError};
use crate::display;
use crate::rules::resolve;
use crate::session::{Round, TurnReport};

/// Map crate errors onto Python exceptions.
pub(crate) fn to_py_err(err: RpsError) -> PyErr {
    match err {
        RpsError::Io(_) | RpsError::Csv(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

pub(crate) fn parse_choice(name: &str) -> PyResult<Choice> {
    name.parse::<Choice>().map_err(to_py_err)
}

pub(crate) fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "player_wins",
        Outcome::ComputerWins => "computer_wins",
        Outcome::Tie => "tie",
    }
}

/// Resolve a round between two named choices.
///
/// Returns "player_wins", "computer_wins" or "tie".
#[pyfunction]
#[pyo3(name = "resolve")]
pub fn py_resolve(player: &str, computer: &str) -> PyResult<&'static str> {
    let outcome = resolve(parse_choice(player)?, parse_choice(computer)?);
    Ok(outcome_name(outcome))
}

/// Python wrapper for Round.
#[pyclass(name = "Round")]
#[derive(Clone, Debug)]
pub struct PyRound(pub Round);

#[pymethods]
impl PyRound {
    #[new]
    fn new(player: &str, computer: &str) -> PyResult<Self> {
        Ok(Self(Round::new(parse_choice(player)?, parse_choice(computer)?)))
    }

    #[getter]
    fn player(&self) -> &'static str {
        self.0.player().name()
    }

    #[getter]
    fn computer(&self) -> &'static str {
        self.0.computer().name()
    }

    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.0.outcome())
    }

    /// Headline text for this round.
    #[getter]
    fn message(&self) -> String {
        display::status_message(&self.0)
    }

    fn __repr__(&self) -> String {
        format!(
            "Round(player={}, computer={}, outcome={})",
            self.0.player(),
            self.0.computer(),
            outcome_name(self.0.outcome())
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for TurnReport.
#[pyclass(name = "Turn")]
#[derive(Clone, Debug)]
pub struct PyTurn(pub TurnReport);

#[pymethods]
impl PyTurn {
    #[getter]
    fn round(&self) -> PyRound {
        PyRound(self.0.round)
    }

    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.0.round.outcome())
    }

    #[getter]
    fn message(&self) -> String {
        display::status_message(&self.0.round)
    }

    /// Score after the round as (player_wins, computer_wins, ties).
    #[getter]
    fn score(&self) -> (u32, u32, u32) {
        self.0.score.as_tuple()
    }

    #[getter]
    fn streak(&self) -> i32 {
        self.0.streaks.current
    }

    /// Titles of badges unlocked by this round.
    #[getter]
    fn unlocked(&self) -> Vec<&'static str> {
        self.0.unlocked.iter().map(|a| a.title()).collect()
    }

    /// Match announcement if this round decided the match.
    #[getter]
    fn match_message(&self) -> Option<String> {
        display::match_message(self.0.match_status, &self.0.score)
    }

    #[getter]
    fn celebrate(&self) -> bool {
        self.0.celebrate
    }

    fn __repr__(&self) -> String {
        format!("Turn({}, score={:?})", self.0.round, self.0.score.as_tuple())
    }
}
