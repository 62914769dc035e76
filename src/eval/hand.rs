//! Five-card hand scoring.
//!
//! A `Hand` is scored once, when it is built, from a rank histogram and a
//! suit histogram of its five cards. Categories are tried from strongest to
//! weakest and the first match wins; high card is the catch-all, so every
//! hand gets exactly one category.
//!
//! Cards are kept sorted by ascending rank. For a wheel (A-2-3-4-5) the ace
//! is moved to the front so it plays low in straight comparisons; everywhere
//! else the ace is high.

use std::cmp::Ordering;
use std::fmt;

use super::category::HandCategory;
use crate::cards::card::{Card, NUM_RANKS, NUM_SUITS, RANK_2, RANK_3, RANK_4, RANK_5, RANK_A};

/// Number of cards in a scored hand.
pub const HAND_SIZE: usize = 5;

/// A scored five-card poker hand.
///
/// `special_value_1` and `special_value_2` hold the matched ranks used to
/// break ties inside a category:
///
/// | category        | `special_value_1` | `special_value_2` |
/// |-----------------|-------------------|-------------------|
/// | four of a kind  | quad rank         | -                 |
/// | full house      | trip rank         | pair rank         |
/// | three of a kind | trip rank         | -                 |
/// | two pair        | higher pair rank  | lower pair rank   |
/// | pair            | pair rank         | -                 |
#[derive(Clone, Copy)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: HandCategory,
    special_value_1: Option<u8>,
    special_value_2: Option<u8>,
}

impl Hand {
    /// Score five distinct cards.
    ///
    /// # Panics
    /// Panics if the cards are not distinct.
    pub fn evaluate(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable();
        assert!(
            cards.windows(2).all(|w| w[0] != w[1]),
            "hand contains duplicate cards: {:?}",
            cards
        );

        let mut rank_counts = [0u8; NUM_RANKS];
        let mut suit_counts = [0u8; NUM_SUITS];
        for card in &cards {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let is_flush = suit_counts.iter().any(|&c| c as usize == HAND_SIZE);
        let is_wheel = is_wheel(&cards);
        let is_straight = rank_counts.iter().all(|&c| c <= 1)
            && (cards[HAND_SIZE - 1].rank() - cards[0].rank() == 4 || is_wheel);

        let quads = rank_with_count(&rank_counts, 4);
        let trips = rank_with_count(&rank_counts, 3);
        let pair = rank_with_count(&rank_counts, 2);

        let (category, special_value_1, special_value_2) = if is_flush && is_straight && !is_wheel && has_ace(&cards) {
            (HandCategory::RoyalFlush, None, None)
        } else if is_flush && is_straight {
            (HandCategory::StraightFlush, None, None)
        } else if let Some(quad) = quads {
            (HandCategory::FourOfAKind, Some(quad), None)
        } else if let (Some(trip), Some(pair)) = (trips, pair) {
            (HandCategory::FullHouse, Some(trip), Some(pair))
        } else if is_flush {
            (HandCategory::Flush, None, None)
        } else if is_straight {
            (HandCategory::Straight, None, None)
        } else if let Some(trip) = trips {
            (HandCategory::ThreeOfAKind, Some(trip), None)
        } else {
            let mut pairs = (0..NUM_RANKS as u8).rev().filter(|&r| rank_counts[r as usize] == 2);
            match (pairs.next(), pairs.next()) {
                (Some(high), Some(low)) => (HandCategory::TwoPair, Some(high), Some(low)),
                (Some(pair), None) => (HandCategory::Pair, Some(pair), None),
                _ => (HandCategory::HighCard, None, None),
            }
        };

        if is_wheel && is_straight {
            cards.rotate_right(1);
        }

        Self {
            cards,
            category,
            special_value_1,
            special_value_2,
        }
    }

    /// Score the first five cards of a slice.
    ///
    /// # Panics
    /// Panics unless the slice holds exactly five distinct cards.
    pub fn from_slice(cards: &[Card]) -> Self {
        assert_eq!(cards.len(), HAND_SIZE, "a hand needs exactly {} cards", HAND_SIZE);
        Self::evaluate([cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Primary tie-break rank (see the type-level table).
    pub fn special_value_1(&self) -> Option<u8> {
        self.special_value_1
    }

    /// Secondary tie-break rank (see the type-level table).
    pub fn special_value_2(&self) -> Option<u8> {
        self.special_value_2
    }

    /// The five cards, ascending by rank (ace first for a wheel).
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Card ranks from the top of the hand down.
    pub fn ranks_high_to_low(&self) -> impl Iterator<Item = u8> + '_ {
        self.cards.iter().rev().map(|c| c.rank())
    }

    /// Ranks outside the matched pattern, highest first.
    pub fn kickers(&self) -> impl Iterator<Item = u8> + '_ {
        let (sv1, sv2) = (self.special_value_1, self.special_value_2);
        self.ranks_high_to_low()
            .filter(move |&r| Some(r) != sv1 && Some(r) != sv2)
    }
}

/// Ranks 2-3-4-5-A, assuming `cards` is sorted.
fn is_wheel(cards: &[Card; HAND_SIZE]) -> bool {
    let ranks = cards.map(|c| c.rank());
    ranks == [RANK_2, RANK_3, RANK_4, RANK_5, RANK_A]
}

fn has_ace(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().any(|c| c.rank() == RANK_A)
}

/// Highest rank appearing exactly `count` times.
fn rank_with_count(rank_counts: &[u8; NUM_RANKS], count: u8) -> Option<u8> {
    (0..NUM_RANKS as u8).rev().find(|&r| rank_counts[r as usize] == count)
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            if self.category.is_rank_sequence() {
                self.ranks_high_to_low().cmp(other.ranks_high_to_low())
            } else {
                self.special_value_1
                    .cmp(&other.special_value_1)
                    .then(self.special_value_2.cmp(&other.special_value_2))
                    .then_with(|| self.kickers().cmp(other.kickers()))
            }
        })
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Suits never break ties.
impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        write!(f, "({})", self.category)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({})", self)
    }
}
