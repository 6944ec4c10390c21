//! Simulation bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::StandardCatalog;
use crate::rules::LossReason;
use crate::sim::{BatchStats, LowCarbonPolicy, RandomPolicy, Simulation};

/// Python wrapper for BatchStats.
#[pyclass(name = "BatchStats")]
#[derive(Clone)]
pub struct PyBatchStats(pub BatchStats);

#[pymethods]
impl PyBatchStats {
    #[getter]
    fn games(&self) -> u32 {
        self.0.games
    }

    #[getter]
    fn wins(&self) -> u32 {
        self.0.wins
    }

    #[getter]
    fn unfinished(&self) -> u32 {
        self.0.unfinished
    }

    #[getter]
    fn win_rate(&self) -> f64 {
        self.0.win_rate()
    }

    #[getter]
    fn mean_turns(&self) -> f64 {
        self.0.mean_turns()
    }

    /// Loss counts keyed by reason name.
    fn losses(&self) -> Vec<(String, u32)> {
        [
            LossReason::CarbonTooHigh,
            LossReason::OutOfMoney,
            LossReason::OutOfHope,
            LossReason::EventDeckExhausted,
            LossReason::Forfeited,
        ]
        .into_iter()
        .map(|r| (format!("{r:?}"), self.0.losses_for(r)))
        .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "BatchStats(games={}, wins={}, win_rate={:.3})",
            self.0.games,
            self.0.wins,
            self.0.win_rate()
        )
    }
}

/// Play `games` games on the built-in catalog.
///
/// # Arguments
/// - policy: "low_carbon" or "random"
/// - games: Number of games
/// - seed: First seed; games use consecutive seeds
#[pyfunction]
#[pyo3(signature = (policy = "low_carbon", games = 100, seed = 0))]
pub fn simulate(policy: &str, games: u64, seed: u64) -> PyResult<PyBatchStats> {
    let catalog = StandardCatalog::standard().map_err(|e| PyValueError::new_err(e.to_string()))?;
    let seeds = seed..seed.saturating_add(games);

    let stats = match policy {
        "low_carbon" => Simulation::new(catalog, LowCarbonPolicy::new()).run_batch(seeds),
        "random" => Simulation::new(catalog, RandomPolicy::new()).run_batch(seeds),
        other => return Err(PyValueError::new_err(format!("unknown policy {other:?}"))),
    };
    Ok(PyBatchStats(stats))
}
