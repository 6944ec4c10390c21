//! Card system: definitions and catalogs.
//!
//! ## Key Types
//!
//! - `ActionCard`: Played from hand, applied at end of turn
//! - `EventCard`: Drawn each turn, applied at start of turn
//! - `Card`: Either of the above
//! - `CardCatalog`: Supplies master card lists, escalations and rewards
//! - `StandardCatalog`: In-memory catalog, loadable from JSON

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, StandardCatalog};
pub use definition::{ActionCard, Card, CardEffect, EventCard};
