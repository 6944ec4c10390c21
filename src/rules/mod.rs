//! Rules: the turn engine and its end conditions.

pub mod engine;
pub mod outcome;

pub use engine::ClimateGame;
pub use outcome::{GameOutcome, LossReason};
