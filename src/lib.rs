//! # climate-cards
//!
//! Rules engine for the Cards for Climate resource card game.
//!
//! The player keeps four resources in balance (money, carbon, hope and
//! momentum) by playing action cards against a randomly ordered deck of
//! event cards, one turn at a time, until carbon is brought down to the
//! goal or one of the loss conditions is reached.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No rendering. The engine takes discrete commands and
//!    emits notifications; a presentation layer drains them and re-renders.
//!
//! 2. **Deterministic**: Every random decision goes through one seeded
//!    `GameRng`, so a game replays exactly from its seed and commands.
//!
//! 3. **Injected, not global**: The engine is an ordinary value built with
//!    its card catalog and configuration and passed to whoever drives it.
//!
//! ## Modules
//!
//! - `core`: Resources, state, commands, RNG, configuration, errors
//! - `cards`: Card definitions and catalogs
//! - `zones`: Decks and the hand
//! - `rules`: The turn engine and end conditions
//! - `events`: Notifications to the presentation layer
//! - `sim`: Headless playouts and policies

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod sim;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, Command, CommandError, CommandRecord, ConfigError, GameConfig, GameRng,
    GameRngState, GameState, HopeLevel, MomentumStall, ResourceDelta, ResourceState, TurnState,
};

pub use crate::cards::{ActionCard, Card, CardCatalog, CardEffect, EventCard, StandardCatalog};

pub use crate::zones::{Deck, Hand};

pub use crate::rules::{ClimateGame, GameOutcome, LossReason};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::sim::{
    BatchStats, GameReport, LowCarbonPolicy, Policy, RandomPolicy, Simulation, SimulationConfig,
};
