//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{ActionCard, StandardCatalog};
use crate::core::{CommandError, GameConfig, GameState};
use crate::rules::{ClimateGame, GameOutcome};

fn command_err(err: CommandError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python view of an action card.
#[pyclass(name = "ActionCard")]
#[derive(Clone, Debug)]
pub struct PyActionCard(pub ActionCard);

#[pymethods]
impl PyActionCard {
    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn description(&self) -> String {
        self.0.description.clone()
    }

    #[getter]
    fn cost_money(&self) -> i32 {
        self.0.cost_money
    }

    #[getter]
    fn cost_carbon(&self) -> i32 {
        self.0.cost_carbon
    }

    #[getter]
    fn hope(&self) -> i32 {
        self.0.hope
    }

    #[getter]
    fn momentum(&self) -> i32 {
        self.0.momentum
    }

    fn __repr__(&self) -> String {
        format!("ActionCard({})", self.0)
    }
}

/// Python wrapper for a game session.
#[pyclass(name = "ClimateGame")]
pub struct PyClimateGame {
    game: ClimateGame<StandardCatalog>,
}

#[pymethods]
impl PyClimateGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - catalog_json: Card catalog as JSON; the built-in set when omitted
    /// - config_json: Rules configuration as JSON; standard rules when omitted
    #[new]
    #[pyo3(signature = (seed = 42, catalog_json = None, config_json = None))]
    fn new(seed: u64, catalog_json: Option<&str>, config_json: Option<&str>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => StandardCatalog::from_json(json),
            None => StandardCatalog::standard(),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let config = match config_json {
            Some(json) => GameConfig::from_json(json),
            None => Ok(GameConfig::default()),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let game = ClimateGame::try_with_config(config, catalog, seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    fn setup_game(&mut self) {
        self.game.setup_game();
    }

    fn begin_turn(&mut self) -> PyResult<()> {
        self.game.begin_turn().map_err(command_err)
    }

    /// Play the card at a 0-based hand position.
    fn play_card_at(&mut self, index: usize) -> PyResult<()> {
        self.game.play_card_at(index).map_err(command_err)
    }

    fn play_card(&mut self, card: &PyActionCard) -> PyResult<()> {
        self.game.play_card(&card.0).map_err(command_err)
    }

    fn redraw(&mut self) -> PyResult<()> {
        self.game.redraw().map_err(command_err)
    }

    fn end_turn(&mut self) -> PyResult<()> {
        self.game.end_turn().map_err(command_err)
    }

    fn forfeit(&mut self) -> PyResult<()> {
        self.game.forfeit().map_err(command_err)
    }

    /// Save the whole session, RNG position included, as JSON.
    fn save_state(&self) -> PyResult<String> {
        serde_json::to_string(self.game.state()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Resume a session saved with `save_state`.
    fn load_state(&mut self, json: &str) -> PyResult<()> {
        let state: GameState =
            serde_json::from_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.game.restore(state);
        Ok(())
    }

    /// Hand positions that can be played now.
    fn legal_plays(&self) -> Vec<usize> {
        (0..self.game.hand().len())
            .filter(|&i| self.game.can_play_at(i))
            .collect()
    }

    fn hand(&self) -> Vec<PyActionCard> {
        self.game.hand().cards().iter().cloned().map(PyActionCard).collect()
    }

    /// Current event card as `(name, money, carbon, hope)`.
    fn current_event(&self) -> Option<(String, i32, i32, i32)> {
        self.game
            .turn()
            .current_event
            .as_ref()
            .map(|e| (e.name.clone(), e.cost_money, e.cost_carbon, e.hope))
    }

    /// Pending notifications as JSON strings, oldest first.
    fn drain_events(&mut self) -> PyResult<Vec<String>> {
        self.game
            .drain_events()
            .iter()
            .map(|e| serde_json::to_string(e).map_err(|err| PyValueError::new_err(err.to_string())))
            .collect()
    }

    #[getter]
    fn money(&self) -> i32 {
        self.game.resources().money()
    }

    #[getter]
    fn carbon(&self) -> i32 {
        self.game.resources().carbon()
    }

    #[getter]
    fn hope(&self) -> i32 {
        self.game.resources().hope()
    }

    #[getter]
    fn momentum(&self) -> i32 {
        self.game.resources().momentum()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.game.turn().turn_number
    }

    #[getter]
    fn turn_active(&self) -> bool {
        self.game.turn().active
    }

    /// "ongoing", "won" or "lost".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.game.outcome() {
            GameOutcome::Ongoing => "ongoing",
            GameOutcome::Won => "won",
            GameOutcome::Lost(_) => "lost",
        }
    }

    #[getter]
    fn loss_reason(&self) -> Option<String> {
        self.game.outcome().loss_reason().map(|r| format!("{r:?}"))
    }

    #[getter]
    fn end_message(&self) -> Option<&'static str> {
        self.game.outcome().message()
    }

    fn __repr__(&self) -> String {
        let res = self.game.resources();
        format!(
            "ClimateGame(turn={}, money={}, carbon={}, hope={}, status={})",
            self.game.turn().turn_number,
            res.money(),
            res.carbon(),
            res.hope(),
            self.game.outcome()
        )
    }
}
