//! Core engine types: resources, state, commands, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod resources;
pub mod rng;
pub mod state;

pub use action::{Command, CommandRecord};
pub use config::{GameConfig, MomentumStall};
pub use error::{CatalogError, CommandError, ConfigError};
pub use resources::{HopeLevel, ResourceDelta, ResourceState};
pub use rng::{GameRng, GameRngState};
pub use state::{ActivePlays, GameState, TurnState};
