//! Error types.
//!
//! Running out of a resource is not an error; it is a transition to
//! `GameOutcome::Lost`. Errors here only describe commands the engine
//! refused, and a refused command never mutates state.

use thiserror::Error;

/// A command the engine refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("the game has already ended")]
    GameOver,

    #[error("no game has been set up")]
    NotSetUp,

    #[error("no turn is active")]
    TurnInactive,

    #[error("a turn is already active")]
    TurnAlreadyActive,

    #[error("no card at hand position {index} (hand holds {hand_len})")]
    NoCardAtIndex { index: usize, hand_len: usize },

    #[error("card {0:?} is not in hand")]
    CardNotInHand(String),

    #[error("card {0:?} has no momentum and a momentum run is active")]
    MomentumRequired(String),
}

/// Failure loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("escalation registered for unknown event card {0:?}")]
    UnknownEscalationSource(String),
}

/// A rules configuration the engine cannot run with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
