//! Draw piles.
//!
//! A `Deck` is drawn from the front. It is built by repeatedly extracting a
//! uniformly random card from the master list until the list is empty, and
//! later cards (escalations, rewards) are inserted at random positions.
//! Backed by `im::Vector` so cloning a game state for a simulation branch
//! is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// An ordered pile of cards, front first.
///
/// ```
/// use climate_cards::core::GameRng;
/// use climate_cards::zones::Deck;
///
/// let mut rng = GameRng::new(1);
/// let mut deck = Deck::from_master(vec![1, 2, 3], &mut rng);
///
/// assert_eq!(deck.len(), 3);
/// let drawn = deck.draw(5);
/// assert_eq!(drawn.len(), 3);
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<T: Clone> {
    cards: Vector<T>,
}

impl<T: Clone> Default for Deck<T> {
    fn default() -> Self {
        Self { cards: Vector::new() }
    }
}

impl<T: Clone> Deck<T> {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck in a fixed order.
    pub fn from_ordered(cards: impl IntoIterator<Item = T>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a deck by random extraction from `master` until it is empty.
    ///
    /// The result is a uniform random permutation of `master`.
    pub fn from_master(mut master: Vec<T>, rng: &mut GameRng) -> Self {
        let mut cards = Vector::new();
        while let Some(card) = rng.extract(&mut master) {
            cards.push_back(card);
        }
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Peek at the next card.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.cards.front()
    }

    /// Remove the front card.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cards.pop_front()
    }

    /// Remove up to `count` cards from the front.
    ///
    /// Returns fewer cards when the deck runs out.
    pub fn draw(&mut self, count: usize) -> Vec<T> {
        let take = count.min(self.cards.len());
        (0..take).filter_map(|_| self.cards.pop_front()).collect()
    }

    /// Insert a card at a random position in `[0, len)`.
    ///
    /// Returns the chosen position.
    pub fn insert_random(&mut self, card: T, rng: &mut GameRng) -> usize {
        let index = rng.insertion_index(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_master_is_permutation() {
        let mut rng = GameRng::new(42);
        let master: Vec<u32> = (0..30).collect();
        let deck = Deck::from_master(master.clone(), &mut rng);

        let mut cards: Vec<u32> = deck.iter().copied().collect();
        assert_ne!(cards, master);
        cards.sort_unstable();
        assert_eq!(cards, master);
    }

    #[test]
    fn test_from_master_deterministic() {
        let a = Deck::from_master((0..10).collect::<Vec<u32>>(), &mut GameRng::new(9));
        let b = Deck::from_master((0..10).collect::<Vec<u32>>(), &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_master() {
        let deck: Deck<u32> = Deck::from_master(Vec::new(), &mut GameRng::new(1));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = Deck::from_ordered(vec!['a', 'b', 'c', 'd']);
        assert_eq!(deck.draw(2), vec!['a', 'b']);
        assert_eq!(deck.front(), Some(&'c'));
        assert_eq!(deck.draw(10), vec!['c', 'd']);
        assert!(deck.draw(1).is_empty());
    }

    #[test]
    fn test_insert_random_never_appends() {
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            let mut deck = Deck::from_ordered(vec![0, 0, 0]);
            let index = deck.insert_random(1, &mut rng);
            assert!(index < 3);
            assert_eq!(deck.len(), 4);
            assert_eq!(deck.iter().last(), Some(&0));
        }
    }

    #[test]
    fn test_insert_into_empty() {
        let mut deck = Deck::new();
        assert_eq!(deck.insert_random(7, &mut GameRng::new(1)), 0);
        assert_eq!(deck.pop_front(), Some(7));
    }
}
