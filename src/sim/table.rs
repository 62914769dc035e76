//! Table state: deck, players and community cards.
//!
//! Seat 0 is the reference player whose win probability is estimated. Every
//! card held by a player or shown on the board has been taken out of the
//! deck, so a card is never in two places at once.

use super::config::ConfigError;
use crate::cards::{Card, Deck};

/// Minimum number of players at a table.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players at a table.
pub const MAX_PLAYERS: usize = 10;

/// Hole cards per player.
pub const HOLE_CARDS: usize = 2;

/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// A player's hole cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub(super) hole: Vec<Card>,
}

impl Player {
    /// Create a player with no cards.
    pub fn new() -> Self {
        Self {
            hole: Vec::with_capacity(HOLE_CARDS),
        }
    }

    /// Get the player's hole cards (0-2).
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// Check if the player holds a card.
    pub fn holds(&self, card: Card) -> bool {
        self.hole.contains(&card)
    }
}

/// The game session a simulation runs against.
#[derive(Debug, Clone)]
pub struct Table {
    pub(super) deck: Deck,
    pub(super) players: Vec<Player>,
    pub(super) community: Vec<Card>,
}

impl Table {
    /// Create a table with a full deck and `num_players` empty seats.
    pub fn new(num_players: usize) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            deck: Deck::full(),
            players: vec![Player::new(); num_players],
            community: Vec::with_capacity(BOARD_SIZE),
        })
    }

    /// Deal the reference player's hole cards out of the deck.
    ///
    /// Cards the reference player already holds go back to the deck first.
    /// On error the table is left unchanged.
    pub fn seat_hero(&mut self, first: Card, second: Card) -> Result<(), ConfigError> {
        let available = |card: Card| self.deck.contains(card) || self.players[0].holds(card);
        if !available(first) {
            return Err(ConfigError::CardUnavailable(first));
        }
        if first == second || !available(second) {
            return Err(ConfigError::CardUnavailable(second));
        }

        for card in self.players[0].hole.drain(..) {
            self.deck.insert(card);
        }
        for card in [first, second] {
            self.deck.remove(card);
            self.players[0].hole.push(card);
        }
        Ok(())
    }

    /// Move a card from the deck onto the board.
    pub fn reveal(&mut self, card: Card) -> Result<(), ConfigError> {
        if self.community.len() >= BOARD_SIZE {
            return Err(ConfigError::TooManyCommunityCards(self.community.len() + 1));
        }
        if !self.deck.remove(card) {
            return Err(ConfigError::CardUnavailable(card));
        }
        self.community.push(card);
        Ok(())
    }

    /// Refill the deck and take out every card on the table.
    pub fn reset_deck(&mut self) {
        self.deck.repopulate();
        for player in &self.players {
            for &card in &player.hole {
                self.deck.remove(card);
            }
        }
        for &card in &self.community {
            self.deck.remove(card);
        }
    }

    /// Number of seats.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// All seats; seat 0 is the reference player.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The reference player.
    pub fn hero(&self) -> &Player {
        &self.players[0]
    }

    /// Community cards revealed so far.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Community cards still to come.
    pub fn board_cards_to_draw(&self) -> usize {
        BOARD_SIZE - self.community.len()
    }

    /// Cards not yet dealt.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
