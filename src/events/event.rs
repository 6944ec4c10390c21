//! State-change notifications.
//!
//! The engine never renders anything. Each command pushes notifications
//! onto an `EventQueue`, and the presentation layer drains the queue after
//! the command returns and re-renders what changed.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionCard, EventCard};
use crate::core::ResourceState;
use crate::rules::GameOutcome;

/// Something the presentation layer may need to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Money, carbon, hope or momentum changed.
    ResourcesChanged(ResourceState),

    /// The hand changed; full ordered contents.
    HandChanged(Vec<ActionCard>),

    /// A new event card was drawn for this turn.
    EventCardChanged(EventCard),

    /// A turn opened.
    TurnBegan { turn: u32 },

    /// A card moved from hand to the active plays.
    CardPlayed(ActionCard),

    /// A turn closed after resolving `plays` cards.
    TurnEnded { turn: u32, plays: usize },

    /// A card was queued into the event deck (escalation or reward).
    EventQueued { card: EventCard, position: usize },

    /// The game reached a terminal outcome.
    GameEnded(GameOutcome),
}

/// Outbox of notifications, in emission order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take every pending notification.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
