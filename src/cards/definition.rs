//! Card definitions - static card data.
//!
//! There are two kinds of card. Event cards are drawn automatically at the
//! start of each turn and applied immediately. Action cards are held in the
//! player's hand, played by choice, and applied when the turn ends.

use serde::{Deserialize, Serialize};

use crate::core::ResourceDelta;

/// Common view of a card's resource effect.
pub trait CardEffect {
    /// Display name, also the catalog key for escalations.
    fn name(&self) -> &str;

    /// Money, carbon and hope changes applied when the card resolves.
    fn delta(&self) -> ResourceDelta;
}

/// A card the player chooses to play.
///
/// ## Example
///
/// ```
/// use climate_cards::cards::{ActionCard, CardEffect};
///
/// let bikes = ActionCard::new("Bike Lanes", -3, -2)
///     .with_hope(1)
///     .with_momentum(1);
///
/// assert!(bikes.has_momentum());
/// assert_eq!(bikes.delta().carbon, -2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCard {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost_money: i32,
    #[serde(default)]
    pub cost_carbon: i32,
    #[serde(default)]
    pub hope: i32,
    /// Positive values may start or continue a momentum run; zero ends the turn.
    #[serde(default)]
    pub momentum: i32,
}

impl ActionCard {
    /// Create an action card with money and carbon deltas.
    pub fn new(name: impl Into<String>, cost_money: i32, cost_carbon: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cost_money,
            cost_carbon,
            hope: 0,
            momentum: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_hope(mut self, hope: i32) -> Self {
        self.hope = hope;
        self
    }

    #[must_use]
    pub fn with_momentum(mut self, momentum: i32) -> Self {
        self.momentum = momentum;
        self
    }

    /// Can this card continue an active momentum run?
    #[must_use]
    pub fn has_momentum(&self) -> bool {
        self.momentum > 0
    }
}

impl CardEffect for ActionCard {
    fn name(&self) -> &str {
        &self.name
    }

    fn delta(&self) -> ResourceDelta {
        ResourceDelta::new(self.cost_money, self.cost_carbon, self.hope)
    }
}

/// A card drawn automatically at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventCard {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost_money: i32,
    #[serde(default)]
    pub cost_carbon: i32,
    #[serde(default)]
    pub hope: i32,
}

impl EventCard {
    /// Create an event card with money and carbon deltas.
    pub fn new(name: impl Into<String>, cost_money: i32, cost_carbon: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cost_money,
            cost_carbon,
            hope: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_hope(mut self, hope: i32) -> Self {
        self.hope = hope;
        self
    }
}

impl CardEffect for EventCard {
    fn name(&self) -> &str {
        &self.name
    }

    fn delta(&self) -> ResourceDelta {
        ResourceDelta::new(self.cost_money, self.cost_carbon, self.hope)
    }
}

/// Either kind of card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Action(ActionCard),
    Event(EventCard),
}

impl Card {
    #[must_use]
    pub fn as_action(&self) -> Option<&ActionCard> {
        match self {
            Card::Action(card) => Some(card),
            Card::Event(_) => None,
        }
    }

    #[must_use]
    pub fn as_event(&self) -> Option<&EventCard> {
        match self {
            Card::Event(card) => Some(card),
            Card::Action(_) => None,
        }
    }
}

impl CardEffect for Card {
    fn name(&self) -> &str {
        match self {
            Card::Action(card) => card.name(),
            Card::Event(card) => card.name(),
        }
    }

    fn delta(&self) -> ResourceDelta {
        match self {
            Card::Action(card) => card.delta(),
            Card::Event(card) => card.delta(),
        }
    }
}

impl From<ActionCard> for Card {
    fn from(card: ActionCard) -> Self {
        Card::Action(card)
    }
}

impl From<EventCard> for Card {
    fn from(card: EventCard) -> Self {
        Card::Event(card)
    }
}

impl std::fmt::Display for ActionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (money {:+}, CO2 {:+}, hope {:+}, momentum {})",
            self.name, self.cost_money, self.cost_carbon, self.hope, self.momentum
        )
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (money {:+}, CO2 {:+}, hope {:+})",
            self.name, self.cost_money, self.cost_carbon, self.hope
        )
    }
}
