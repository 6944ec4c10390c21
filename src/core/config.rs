//! Game configuration.
//!
//! `GameConfig` carries every constant the rules depend on. The default
//! matches the standard game: 20 money, 20 carbon, full hope, a five-card
//! hand, up to three plays per turn and a redraw that costs 5.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// What happens when a momentum run has no momentum card left to continue it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumStall {
    /// Keep the turn open; the player ends it with an explicit EndTurn.
    #[default]
    Idle,
    /// End the turn as soon as the run cannot continue.
    ForceEndTurn,
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Money at setup.
    pub starting_money: i32,

    /// Carbon at setup.
    pub starting_carbon: i32,

    /// Hope at setup (clamped to `[0, max_hope]`).
    pub starting_hope: i32,

    /// Upper clamp for hope.
    pub max_hope: i32,

    /// Upper clamp for momentum.
    pub max_momentum: i32,

    /// Cards held after every draw.
    pub hand_size: usize,

    /// Plays that force the turn to end.
    pub max_plays_per_turn: usize,

    /// Money paid for a redraw.
    pub redraw_cost: i32,

    /// Carbon at or above this loses.
    pub carbon_limit: i32,

    /// Carbon at or below this wins.
    pub carbon_goal: i32,

    /// Money at or below this loses.
    pub money_floor: i32,

    /// Behavior when a momentum run stalls.
    pub momentum_stall: MomentumStall,

    /// Open the next turn automatically at the end of EndTurn.
    pub auto_advance: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: 20,
            starting_carbon: 20,
            starting_hope: 3,
            max_hope: 3,
            max_momentum: 3,
            hand_size: 5,
            max_plays_per_turn: 3,
            redraw_cost: 5,
            carbon_limit: 30,
            carbon_goal: 0,
            money_floor: 0,
            momentum_stall: MomentumStall::Idle,
            auto_advance: true,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their standard values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the builders would have asserted on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if self.max_hope < 1 {
            return invalid("max_hope", "must be at least 1");
        }
        if !(0..=self.max_hope).contains(&self.starting_hope) {
            return invalid("starting_hope", "must be between 0 and max_hope");
        }
        if self.max_momentum < 0 {
            return invalid("max_momentum", "must not be negative");
        }
        if self.hand_size == 0 {
            return invalid("hand_size", "must be at least 1");
        }
        if self.max_plays_per_turn == 0 {
            return invalid("max_plays_per_turn", "must be at least 1");
        }
        if self.redraw_cost < 0 {
            return invalid("redraw_cost", "must not be negative");
        }
        if self.carbon_goal >= self.carbon_limit {
            return invalid("carbon_goal", "must be below carbon_limit");
        }
        Ok(())
    }

    /// Set starting money and carbon.
    #[must_use]
    pub fn with_starting_resources(mut self, money: i32, carbon: i32) -> Self {
        self.starting_money = money;
        self.starting_carbon = carbon;
        self
    }

    /// Set starting hope.
    #[must_use]
    pub fn with_starting_hope(mut self, hope: i32) -> Self {
        self.starting_hope = hope;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Set the number of plays that end a turn.
    #[must_use]
    pub fn with_max_plays(mut self, plays: usize) -> Self {
        assert!(plays > 0, "Must allow at least 1 play per turn");
        self.max_plays_per_turn = plays;
        self
    }

    /// Set the redraw cost.
    #[must_use]
    pub fn with_redraw_cost(mut self, cost: i32) -> Self {
        self.redraw_cost = cost;
        self
    }

    /// Set the carbon loss limit and win goal.
    #[must_use]
    pub fn with_carbon_bounds(mut self, goal: i32, limit: i32) -> Self {
        assert!(goal < limit, "Carbon goal must be below the carbon limit");
        self.carbon_goal = goal;
        self.carbon_limit = limit;
        self
    }

    /// Set the momentum stall behavior.
    #[must_use]
    pub fn with_momentum_stall(mut self, stall: MomentumStall) -> Self {
        self.momentum_stall = stall;
        self
    }

    /// Require an explicit BeginTurn after each EndTurn.
    #[must_use]
    pub fn manual_advance(mut self) -> Self {
        self.auto_advance = false;
        self
    }
}
