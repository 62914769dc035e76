//! Card representation.
//!
//! A `Card` is an immutable rank/suit pair packed into a single byte id.
//! Cards order by rank first and suit second, so sorting a slice of cards
//! sorts it by rank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3).
pub const SUIT_CLUBS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_HEARTS: u8 = 2;
pub const SUIT_SPADES: u8 = 3;

/// Number of distinct ranks.
pub const NUM_RANKS: usize = 13;

/// Number of distinct suits.
pub const NUM_SUITS: usize = 4;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = NUM_RANKS * NUM_SUITS;

const RANK_CHARS: [char; NUM_RANKS] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

const SUIT_CHARS: [char; NUM_SUITS] = ['c', 'd', 'h', 's'];

const SUIT_GLYPHS: [char; NUM_SUITS] = ['♣', '♦', '♥', '♠'];

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!((rank as usize) < NUM_RANKS, "rank must be 0-12");
        debug_assert!((suit as usize) < NUM_SUITS, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!((id as usize) < DECK_SIZE, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }

    /// Iterate over all 52 cards in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card::from_id)
    }
}

/// Parse a rank label: `2`-`9`, `T`/`10`, `J`, `Q`, `K`, `A`.
fn parse_rank(label: &str) -> Option<u8> {
    if label == "10" {
        return Some(RANK_T);
    }
    let mut chars = label.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    RANK_CHARS.iter().position(|&r| r == c).map(|r| r as u8)
}

/// Parse a suit label: `c`, `d`, `h`, `s` or one of the suit glyphs.
fn parse_suit(label: &str) -> Option<u8> {
    let mut chars = label.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let lower = c.to_ascii_lowercase();
    SUIT_CHARS
        .iter()
        .position(|&s| s == lower)
        .or_else(|| SUIT_GLYPHS.iter().position(|&g| g == c))
        .map(|s| s as u8)
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse a card from a label like "As", "Kh", "10d" or "Q♠".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| ParseCardError::InvalidLabel(s.to_string()))?;
        let (rank, suit) = s.split_at(split);
        let rank = parse_rank(rank).ok_or_else(|| ParseCardError::InvalidRank(rank.to_string()))?;
        let suit = parse_suit(suit).ok_or_else(|| ParseCardError::InvalidSuit(suit.to_string()))?;
        Ok(Self::new(rank, suit))
    }
}

/// Parse a list of cards like "AsKs", "As Ks" or "As,Ks".
///
/// An empty string parses to an empty list.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = Vec::new();
    let mut label = String::new();

    for c in s.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        label.push(c);
        // A label is complete once it ends with a suit; "10" keeps the
        // rank open for one more character.
        if parse_suit(&c.to_string()).is_some() && label.chars().count() > 1 {
            cards.push(label.parse()?);
            label.clear();
        }
    }

    if !label.is_empty() {
        return Err(ParseCardError::InvalidLabel(label));
    }
    Ok(cards)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Errors that can occur when parsing card labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The label is empty or incomplete.
    InvalidLabel(String),
    /// The rank part is not one of 2-9, T, J, Q, K, A.
    InvalidRank(String),
    /// The suit part is not one of c, d, h, s.
    InvalidSuit(String),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLabel(s) => write!(f, "Invalid card label: '{}'", s),
            Self::InvalidRank(s) => write!(f, "Invalid rank: '{}' (expected 2-9, T, J, Q, K or A)", s),
            Self::InvalidSuit(s) => write!(f, "Invalid suit: '{}' (expected c, d, h or s)", s),
        }
    }
}

impl std::error::Error for ParseCardError {}
