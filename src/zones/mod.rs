//! Card locations: draw piles and the hand.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered draw pile built by random extraction
//! - `Hand`: The player's bounded hand of action cards

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
