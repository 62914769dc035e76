//! Best-hand selection over a card pool.

use super::combinations::Combinations;
use super::hand::{Hand, HAND_SIZE};
use crate::cards::Card;

/// Score every five-card subset of `pool` and return the strongest.
///
/// The first subset is the initial best and a later one replaces it only if
/// it is strictly stronger.
///
/// # Panics
/// Panics if the pool holds fewer than five cards.
pub fn best_hand(pool: &[Card]) -> Hand {
    assert!(
        pool.len() >= HAND_SIZE,
        "need at least {} cards to make a hand, got {}",
        HAND_SIZE,
        pool.len()
    );

    let mut candidates = Combinations::new(pool, HAND_SIZE).map(|cards| Hand::from_slice(&cards));
    let Some(first) = candidates.next() else {
        unreachable!("a pool of {} cards has at least one five-card subset", pool.len());
    };
    candidates.fold(first, |best, hand| if hand > best { hand } else { best })
}

/// Best hand for hole cards plus community cards.
pub fn best_hand_with_board(hole: &[Card], community: &[Card]) -> Hand {
    let pool: Vec<Card> = hole.iter().chain(community).copied().collect();
    best_hand(&pool)
}
