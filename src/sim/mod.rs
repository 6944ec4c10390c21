//! Headless simulation: play whole games without a presentation layer.
//!
//! ## Key Types
//!
//! - `Policy`: Chooses commands for a running game
//! - `RandomPolicy`, `LowCarbonPolicy`: Built-in players
//! - `Simulation`: Runs games to completion under a policy
//! - `BatchStats`: Outcome counts across many seeds
//!
//! ## Example
//!
//! ```
//! use climate_cards::cards::StandardCatalog;
//! use climate_cards::sim::{LowCarbonPolicy, Simulation};
//!
//! let sim = Simulation::new(StandardCatalog::standard().unwrap(), LowCarbonPolicy::new());
//! let stats = sim.run_batch(0..10);
//! assert_eq!(stats.games, 10);
//! ```

pub mod policy;
pub mod runner;

pub use policy::{LowCarbonPolicy, Policy, RandomPolicy};
pub use runner::{BatchStats, GameReport, Simulation, SimulationConfig};
