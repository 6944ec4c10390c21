//! Game state.
//!
//! ## TurnState
//!
//! Per-turn bookkeeping: turn counter, whether plays are accepted, the
//! cards played so far and the event card that opened the turn.
//!
//! ## GameState
//!
//! Everything the rules engine owns for one session: resources, both
//! decks, hand, discard pile, turn, outcome, command history and RNG.
//! Cloning is cheap (decks are persistent vectors), which the simulator
//! relies on. The whole state, RNG position included, serializes with
//! serde, so a game can be saved and resumed mid-turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Command, CommandRecord};
use super::config::GameConfig;
use super::resources::ResourceState;
use super::rng::GameRng;
use crate::cards::{ActionCard, EventCard};
use crate::rules::GameOutcome;
use crate::zones::{Deck, Hand};

/// Cards played this turn. Three plays fit inline in the standard game.
pub type ActivePlays = SmallVec<[ActionCard; 3]>;

/// State of the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Turns begun so far (0 before the first turn).
    pub turn_number: u32,

    /// Are plays being accepted?
    pub active: bool,

    /// Cards played this turn, in play order. Applied at end of turn.
    pub active_plays: ActivePlays,

    /// Event card that opened this turn.
    pub current_event: Option<EventCard>,
}

impl TurnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plays_made(&self) -> usize {
        self.active_plays.len()
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Money, carbon, hope and momentum.
    pub resources: ResourceState,

    /// Action cards still to be drawn.
    pub action_deck: Deck<ActionCard>,

    /// Event cards still to come, front first.
    pub event_deck: Deck<EventCard>,

    /// The player's hand.
    pub hand: Hand,

    /// Action cards that left play (resolved or redrawn away).
    pub discard: Vec<ActionCard>,

    /// Current turn.
    pub turn: TurnState,

    /// Ongoing, won or lost.
    pub outcome: GameOutcome,

    /// Accepted commands, oldest first.
    pub history: Vec<CommandRecord>,

    /// Source of every random decision.
    pub rng: GameRng,

    set_up: bool,
}

impl GameState {
    /// Create an empty, not yet set up state.
    #[must_use]
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            resources: ResourceState::from_config(config),
            action_deck: Deck::new(),
            event_deck: Deck::new(),
            hand: Hand::new(config.hand_size),
            discard: Vec::new(),
            turn: TurnState::new(),
            outcome: GameOutcome::Ongoing,
            history: Vec::new(),
            rng: GameRng::new(seed),
            set_up: false,
        }
    }

    /// Reset for a new session, keeping the RNG stream.
    pub fn reset(&mut self, config: &GameConfig) {
        self.resources = ResourceState::from_config(config);
        self.action_deck = Deck::new();
        self.event_deck = Deck::new();
        self.hand = Hand::new(config.hand_size);
        self.discard.clear();
        self.turn = TurnState::new();
        self.outcome = GameOutcome::Ongoing;
        self.history.clear();
        self.set_up = true;
    }

    /// Has `SetupGame` run?
    #[must_use]
    pub fn is_set_up(&self) -> bool {
        self.set_up
    }

    /// Is the game over?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Append an accepted command to the history.
    pub fn record(&mut self, command: Command) {
        let sequence = self.history.len() as u32;
        self.history.push(CommandRecord {
            turn: self.turn.turn_number,
            sequence,
            command,
        });
    }

    /// Count of action cards in every location.
    ///
    /// Equals the catalog's action card count for the whole session.
    #[must_use]
    pub fn action_cards_accounted(&self) -> usize {
        self.action_deck.len() + self.hand.len() + self.turn.active_plays.len() + self.discard.len()
    }
}
