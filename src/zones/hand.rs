//! The player's hand.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::cards::ActionCard;

/// Ordered, bounded list of action cards.
///
/// Only the rules engine mutates a hand, through `fill_from`, `remove` and
/// `discard_all`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<ActionCard>,
    capacity: usize,
}

impl Hand {
    /// Create an empty hand holding at most `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActionCard> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[ActionCard] {
        &self.cards
    }

    /// Position of the first card equal to `card`.
    #[must_use]
    pub fn position_of(&self, card: &ActionCard) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Draw from the front of `deck` until full or the deck runs out.
    ///
    /// Returns the newly drawn cards.
    pub fn fill_from(&mut self, deck: &mut Deck<ActionCard>) -> Vec<ActionCard> {
        let missing = self.capacity.saturating_sub(self.cards.len());
        let drawn = deck.draw(missing);
        self.cards.extend(drawn.iter().cloned());
        drawn
    }

    /// Remove the card at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<ActionCard> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empty the hand, returning the cards in order.
    pub fn discard_all(&mut self) -> Vec<ActionCard> {
        std::mem::take(&mut self.cards)
    }

    /// Does any card carry a non-zero momentum value?
    #[must_use]
    pub fn any_momentum(&self) -> bool {
        self.cards.iter().any(|c| c.momentum != 0)
    }

    /// Does any card change hope?
    #[must_use]
    pub fn any_hope(&self) -> bool {
        self.cards.iter().any(|c| c.hope != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> Deck<ActionCard> {
        Deck::from_ordered((0..n).map(|i| ActionCard::new(format!("Card {i}"), -1, -1)))
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut hand = Hand::new(5);
        let mut deck = deck_of(8);

        let drawn = hand.fill_from(&mut deck);
        assert_eq!(drawn.len(), 5);
        assert!(hand.is_full());
        assert_eq!(deck.len(), 3);
        assert_eq!(hand.get(0).unwrap().name, "Card 0");
    }

    #[test]
    fn test_fill_stops_when_deck_empty() {
        let mut hand = Hand::new(5);
        let mut deck = deck_of(2);

        hand.fill_from(&mut deck);
        assert_eq!(hand.len(), 2);
        assert!(deck.is_empty());
        assert!(hand.fill_from(&mut deck).is_empty());
    }

    #[test]
    fn test_refill_only_missing() {
        let mut hand = Hand::new(5);
        let mut deck = deck_of(10);
        hand.fill_from(&mut deck);
        hand.remove(1);
        hand.remove(1);

        let drawn = hand.fill_from(&mut deck);
        assert_eq!(drawn.len(), 2);
        assert_eq!(hand.cards()[3].name, "Card 5");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut hand = Hand::new(5);
        assert!(hand.remove(0).is_none());
    }

    #[test]
    fn test_negative_momentum_counts_as_momentum() {
        let mut hand = Hand::new(5);
        let mut deck = Deck::from_ordered(vec![
            ActionCard::new("Flat", 0, 0),
            ActionCard::new("Backlash", 0, 0).with_momentum(-2),
        ]);
        hand.fill_from(&mut deck);
        assert!(hand.any_momentum());

        hand.remove(1);
        assert!(!hand.any_momentum());
    }

    #[test]
    fn test_queries() {
        let mut hand = Hand::new(5);
        let mut deck = Deck::from_ordered(vec![
            ActionCard::new("Flat", 0, 0),
            ActionCard::new("Run", 0, 0).with_momentum(1),
        ]);
        hand.fill_from(&mut deck);

        assert!(hand.any_momentum());
        assert!(!hand.any_hope());
        assert_eq!(hand.position_of(&ActionCard::new("Run", 0, 0).with_momentum(1)), Some(1));

        let discarded = hand.discard_all();
        assert_eq!(discarded.len(), 2);
        assert!(hand.is_empty());
    }
}
