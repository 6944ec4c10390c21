//! Card catalogs: the source of every card in a game.
//!
//! The engine asks its catalog for fresh copies of the master card lists at
//! every setup, so a catalog is never consumed by play. `StandardCatalog`
//! is the in-memory implementation, loadable from JSON:
//!
//! ```json
//! {
//!   "action_cards": [{ "name": "Bike Lanes", "cost_money": -3, "cost_carbon": -2, "momentum": 1 }],
//!   "event_cards": [{ "name": "Heatwave", "cost_carbon": 3, "hope": -1 }],
//!   "escalations": { "Heatwave": { "name": "Record Heatwave", "cost_carbon": 5, "hope": -1 } },
//!   "reward_pool": [{ "name": "Climate Accord", "cost_carbon": -4, "hope": 1 }]
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{ActionCard, EventCard};
use crate::core::CatalogError;

/// Built-in card set shipped with the crate.
const STANDARD_CARDS_JSON: &str = include_str!("../../data/cards.json");

/// Supplier of card definitions to the rules engine.
pub trait CardCatalog {
    /// Every action card in the game (duplicates allowed).
    fn master_action_cards(&self) -> Vec<ActionCard>;

    /// Every event card in the starting event deck (duplicates allowed).
    fn master_event_cards(&self) -> Vec<EventCard>;

    /// The harsher follow-up queued after the named event resolves, if any.
    fn escalation_for(&self, event_name: &str) -> Option<EventCard>;

    /// Positive events that may be earned by a full turn of plays.
    fn reward_pool(&self) -> Vec<EventCard>;
}

/// In-memory catalog.
///
/// ## Example
///
/// ```
/// use climate_cards::cards::{ActionCard, CardCatalog, EventCard, StandardCatalog};
///
/// let catalog = StandardCatalog::new()
///     .with_action(ActionCard::new("Bike Lanes", -3, -2).with_momentum(1))
///     .with_event(EventCard::new("Heatwave", 0, 3))
///     .with_escalation("Heatwave", EventCard::new("Record Heatwave", 0, 5));
///
/// assert_eq!(catalog.master_action_cards().len(), 1);
/// assert!(catalog.escalation_for("Heatwave").is_some());
/// assert!(catalog.escalation_for("Flood").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardCatalog {
    action_cards: Vec<ActionCard>,
    event_cards: Vec<EventCard>,
    escalations: FxHashMap<String, EventCard>,
    reward_pool: Vec<EventCard>,
}

impl StandardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json(STANDARD_CARDS_JSON)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "loaded catalog: {} action cards, {} event cards, {} escalations, {} rewards",
            catalog.action_cards.len(),
            catalog.event_cards.len(),
            catalog.escalations.len(),
            catalog.reward_pool.len()
        );
        Ok(catalog)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every escalation key must name an event that can actually be drawn.
    fn validate(&self) -> Result<(), CatalogError> {
        let drawable = |name: &str| {
            self.event_cards.iter().any(|c| c.name == name)
                || self.reward_pool.iter().any(|c| c.name == name)
                || self.escalations.values().any(|c| c.name == name)
        };

        for source in self.escalations.keys() {
            if !drawable(source) {
                return Err(CatalogError::UnknownEscalationSource(source.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_action(mut self, card: ActionCard) -> Self {
        self.action_cards.push(card);
        self
    }

    #[must_use]
    pub fn with_actions(mut self, cards: impl IntoIterator<Item = ActionCard>) -> Self {
        self.action_cards.extend(cards);
        self
    }

    #[must_use]
    pub fn with_event(mut self, card: EventCard) -> Self {
        self.event_cards.push(card);
        self
    }

    #[must_use]
    pub fn with_events(mut self, cards: impl IntoIterator<Item = EventCard>) -> Self {
        self.event_cards.extend(cards);
        self
    }

    /// Register the card queued after `source` resolves.
    #[must_use]
    pub fn with_escalation(mut self, source: impl Into<String>, card: EventCard) -> Self {
        self.escalations.insert(source.into(), card);
        self
    }

    #[must_use]
    pub fn with_reward(mut self, card: EventCard) -> Self {
        self.reward_pool.push(card);
        self
    }
}

impl CardCatalog for StandardCatalog {
    fn master_action_cards(&self) -> Vec<ActionCard> {
        self.action_cards.clone()
    }

    fn master_event_cards(&self) -> Vec<EventCard> {
        self.event_cards.clone()
    }

    fn escalation_for(&self, event_name: &str) -> Option<EventCard> {
        self.escalations.get(event_name).cloned()
    }

    fn reward_pool(&self) -> Vec<EventCard> {
        self.reward_pool.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = StandardCatalog::standard().unwrap();
        assert!(catalog.master_action_cards().len() >= 15);
        assert!(catalog.master_event_cards().len() >= 10);
        assert!(!catalog.reward_pool().is_empty());
        assert!(catalog.master_action_cards().iter().any(|c| c.has_momentum()));
    }

    #[test]
    fn test_every_standard_escalation_is_reachable() {
        let catalog = StandardCatalog::standard().unwrap();
        let events = catalog.master_event_cards();
        assert!(events.iter().any(|e| catalog.escalation_for(&e.name).is_some()));
    }

    #[test]
    fn test_duplicates_preserved() {
        let card = ActionCard::new("Recycle", -1, -1);
        let catalog = StandardCatalog::new().with_actions(vec![card.clone(), card.clone()]);
        assert_eq!(catalog.master_action_cards(), vec![card.clone(), card]);
    }

    #[test]
    fn test_from_json_partial() {
        let catalog = StandardCatalog::from_json(
            r#"{ "event_cards": [{ "name": "Flood", "cost_money": -4 }] }"#,
        )
        .unwrap();
        assert!(catalog.master_action_cards().is_empty());
        assert_eq!(catalog.master_event_cards()[0].cost_money, -4);
    }

    #[test]
    fn test_unknown_escalation_rejected() {
        let result = StandardCatalog::from_json(
            r#"{ "escalations": { "Nothing": { "name": "Worse Nothing" } } }"#,
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnknownEscalationSource(name)) if name == "Nothing"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StandardCatalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = StandardCatalog::standard().unwrap();
        let json = catalog.to_json().unwrap();
        let reloaded = StandardCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.master_event_cards(), reloaded.master_event_cards());
    }
}
