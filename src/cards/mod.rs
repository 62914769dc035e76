//! Card model.
//!
//! ## Modules
//!
//! - `card`: Card values, rank/suit constants and label parsing
//! - `deck`: A set of up to 52 unique cards with random draw and restore

pub mod card;
pub mod deck;

pub use card::{parse_cards, Card, ParseCardError};
pub use deck::Deck;
