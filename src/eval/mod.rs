//! Poker hand evaluation.
//!
//! This module scores five-card hands into one of ten categories and orders
//! them, and picks the best five-card hand out of a larger pool.
//!
//! ## Modules
//!
//! - `category`: The ten hand categories, weakest to strongest
//! - `hand`: Histogram-based scoring and tie-break comparison
//! - `combinations`: Lazy k-subset enumeration
//! - `best`: Best-hand selection over 5-7 cards

pub mod best;
pub mod category;
pub mod combinations;
pub mod hand;

pub use best::{best_hand, best_hand_with_board};
pub use category::HandCategory;
pub use combinations::{binomial, Combinations};
pub use hand::{Hand, HAND_SIZE};

use crate::cards::Card;
use std::cmp::Ordering;

/// Score exactly five distinct cards.
///
/// The returned hand carries its category and tie-break ranks.
pub fn evaluate_hand(cards: [Card; HAND_SIZE]) -> Hand {
    Hand::evaluate(cards)
}

/// Order two scored hands: category first, then the category's tie-break.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.cmp(b)
}
