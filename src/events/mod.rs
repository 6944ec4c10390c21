//! Notifications from the rules engine to the presentation layer.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: One state change worth re-rendering
//! - [`EventQueue`]: Outbox drained after each command
//!
//! ## Example Usage
//!
//! ```
//! use climate_cards::cards::StandardCatalog;
//! use climate_cards::events::GameEvent;
//! use climate_cards::rules::ClimateGame;
//!
//! let mut game = ClimateGame::new(StandardCatalog::standard().unwrap(), 42);
//! game.setup_game();
//!
//! let events = game.drain_events();
//! assert!(events.iter().any(|e| matches!(e, GameEvent::TurnBegan { turn: 1 })));
//! ```

pub mod event;

pub use event::{EventQueue, GameEvent};
