//! Python bindings for the climate-cards rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import climate_cards as cc
//!
//! game = cc.ClimateGame(seed=42)
//! game.setup_game()
//!
//! while game.outcome == "ongoing":
//!     plays = game.legal_plays()
//!     if plays:
//!         game.play_card_at(plays[0])
//!     else:
//!         game.end_turn()
//!
//! print(game.end_message)
//! print(cc.simulate("low_carbon", games=1000))
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_sim;

pub use py_game::*;
pub use py_sim::*;

/// climate_cards: rules engine for the Cards for Climate game.
#[pymodule]
fn climate_cards(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyActionCard>()?;
    m.add_class::<PyClimateGame>()?;
    m.add_class::<PyBatchStats>()?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    Ok(())
}
