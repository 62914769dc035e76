//! Deck of playing cards.
//!
//! The deck is an unordered set of at most 52 unique cards. Cards leave the
//! deck when dealt and come back when a trial is undone, so the deck never
//! holds a card that is also in a player's hand or on the board.

use rand::Rng;
use std::fmt;

use super::card::{Card, DECK_SIZE};

/// A deck of up to 52 unique playing cards.
#[derive(Clone)]
pub struct Deck {
    /// Cards currently in the deck, in no particular order.
    cards: Vec<Card>,
    /// Bitmask of cards present (bit `id` set when the card is in the deck).
    present: u64,
}

impl Deck {
    /// Create a full 52-card deck.
    pub fn full() -> Self {
        let mut deck = Self::empty();
        deck.repopulate();
        deck
    }

    /// Create an empty deck.
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(DECK_SIZE),
            present: 0,
        }
    }

    /// Create a full deck with specific cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let mut deck = Self::full();
        for &card in dead_cards {
            deck.remove(card);
        }
        deck
    }

    /// Reset the deck to all 52 cards.
    pub fn repopulate(&mut self) {
        self.cards.clear();
        self.cards.extend(Card::all());
        self.present = (1u64 << DECK_SIZE) - 1;
    }

    /// Get the number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card is in the deck.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.present & (1u64 << card.id()) != 0
    }

    /// Look up a card by label ("As", "Td", ...).
    ///
    /// Returns `None` if the label is malformed or the card is not in the deck.
    pub fn find(&self, label: &str) -> Option<Card> {
        let card: Card = label.parse().ok()?;
        self.contains(card).then_some(card)
    }

    /// Remove a specific card. Returns false if it was not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        if !self.contains(card) {
            return false;
        }
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.swap_remove(pos);
        }
        self.present &= !(1u64 << card.id());
        true
    }

    /// Return a card to the deck.
    ///
    /// # Panics
    /// Panics if the card is already in the deck.
    pub fn insert(&mut self, card: Card) {
        assert!(
            !self.contains(card),
            "duplicate card {} returned to deck",
            card
        );
        self.cards.push(card);
        self.present |= 1u64 << card.id();
    }

    /// Draw a uniformly random card, removing it from the deck.
    ///
    /// # Panics
    /// Panics if the deck is empty.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        assert!(!self.cards.is_empty(), "cannot draw from an empty deck");
        let idx = rng.gen_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        self.present &= !(1u64 << card.id());
        card
    }

    /// Get the cards currently in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted = self.cards.clone();
        sorted.sort_unstable();
        for (i, card) in sorted.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_and_empty() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 52);
        assert!(Card::all().all(|c| deck.contains(c)));

        let empty = Deck::empty();
        assert!(empty.is_empty());
        assert!(!empty.contains(card("As")));
    }

    #[test]
    fn test_remove_and_find() {
        let mut deck = Deck::full();
        assert_eq!(deck.find("As"), Some(card("As")));

        assert!(deck.remove(card("As")));
        assert!(!deck.remove(card("As")));
        assert_eq!(deck.len(), 51);
        assert_eq!(deck.find("As"), None);
        assert_eq!(deck.find("bogus"), None);
    }

    #[test]
    fn test_deck_without() {
        let deck = Deck::without(&[card("As"), card("Ah")]);
        assert_eq!(deck.len(), 50);
        assert!(!deck.contains(card("As")));
        assert!(deck.contains(card("Ad")));
    }

    #[test]
    fn test_draw_until_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::full();
        let mut seen = HashSet::new();

        while !deck.is_empty() {
            let c = deck.draw_random(&mut rng);
            assert!(!deck.contains(c));
            assert!(seen.insert(c), "card {} drawn twice", c);
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn test_draw_from_empty_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        Deck::empty().draw_random(&mut rng);
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn test_duplicate_insert_panics() {
        let mut deck = Deck::full();
        deck.insert(card("Kd"));
    }

    #[test]
    fn test_draw_and_restore() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::without(&[card("As"), card("Ks")]);
        let before: HashSet<Card> = deck.cards().iter().copied().collect();

        let drawn: Vec<Card> = (0..9).map(|_| deck.draw_random(&mut rng)).collect();
        assert_eq!(deck.len(), 41);
        for c in drawn {
            deck.insert(c);
        }

        let after: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(before, after);

        deck.repopulate();
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn test_display_sorted() {
        let mut deck = Deck::empty();
        deck.insert(card("As"));
        deck.insert(card("2c"));
        assert_eq!(deck.to_string(), "2c As");
    }
}
