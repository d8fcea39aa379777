//! Python bindings for the rust-rps game core.
//!
//! Lets a Python UI (Tkinter, Qt, ...) drive the session while the rules,
//! score and randomness stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import rust_rps as rps
//!
//! session = rps.GameSession(seed=42, best_of=5)
//!
//! turn = session.play("rock")
//! print(turn.message)            # "You WIN! ..." / "You LOSE. ..." / "Tie. ..."
//! if turn.celebrate:
//!     show_confetti()
//!
//! print(session.score)           # (player_wins, computer_wins, ties)
//! session.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-rps: Rock-Paper-Scissors game core.
#[pymodule]
fn rust_rps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRound>()?;
    m.add_class::<PyTurn>()?;
    m.add_class::<PyGameSession>()?;

    m.add_function(wrap_pyfunction!(py_resolve, m)?)?;

    Ok(())
}
