//! Inbound commands from the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::ActionCard;

/// A discrete player command.
///
/// Commands are processed one at a time, each to completion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reset everything and start turn 1.
    SetupGame,
    /// Draw the next event card and open a turn.
    BeginTurn,
    /// Play the card at a 0-based hand position.
    PlayCardAt(usize),
    /// Play the first hand card equal to this one.
    PlayCard(ActionCard),
    /// Pay to replace the whole hand.
    Redraw,
    /// Close the current turn voluntarily.
    EndTurn,
    /// Concede the game.
    Forfeit,
}

impl Command {
    /// Is this a card play (by index or by card)?
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Command::PlayCardAt(_) | Command::PlayCard(_))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SetupGame => write!(f, "SetupGame"),
            Command::BeginTurn => write!(f, "BeginTurn"),
            Command::PlayCardAt(i) => write!(f, "PlayCardAt({i})"),
            Command::PlayCard(card) => write!(f, "PlayCard({})", card.name),
            Command::Redraw => write!(f, "Redraw"),
            Command::EndTurn => write!(f, "EndTurn"),
            Command::Forfeit => write!(f, "Forfeit"),
        }
    }
}

/// An accepted command, for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Turn number when the command was accepted.
    pub turn: u32,
    /// Position in the game's command sequence.
    pub sequence: u32,
    /// The command itself.
    pub command: Command,
}
