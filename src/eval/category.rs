//! Hand categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// All categories from weakest to strongest.
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Strength index, 0 (high card) to 9 (royal flush).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether ties in this category are broken by rank run alone
    /// rather than by matched ranks followed by kickers.
    pub fn is_rank_sequence(&self) -> bool {
        matches!(
            self,
            HandCategory::HighCard
                | HandCategory::Straight
                | HandCategory::Flush
                | HandCategory::StraightFlush
                | HandCategory::RoyalFlush
        )
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        for pair in HandCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
        assert_eq!(HandCategory::RoyalFlush.index(), 9);
        assert_eq!(HandCategory::ALL[HandCategory::FullHouse.index()], HandCategory::FullHouse);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(HandCategory::HighCard.to_string(), "High Card");
        assert_eq!(HandCategory::RoyalFlush.name(), "Royal Flush");
    }
}
