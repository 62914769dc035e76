//! A single Monte Carlo trial.
//!
//! One trial deals random hole cards to every opponent, completes the board,
//! and checks whether the reference player's best hand is beaten. All cards
//! drawn during the trial go back to the deck before it returns.

use rand::Rng;
use std::cmp::Ordering;

use super::table::{Table, BOARD_SIZE, HOLE_CARDS};
use crate::eval::{best_hand_with_board, HandCategory};

/// How the reference player fared in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialResult {
    /// Strictly better than every opponent.
    Win,
    /// Not beaten, but at least one opponent holds an equal hand.
    Tie,
    /// At least one opponent holds a better hand.
    Loss,
}

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Win, tie or loss for the reference player.
    pub result: TrialResult,
    /// Category of the reference player's best hand.
    pub hero_category: HandCategory,
}

impl TrialOutcome {
    /// A tie counts as a win: the reference player wins a trial when no
    /// opponent's hand is strictly better.
    pub fn is_win(&self) -> bool {
        self.result != TrialResult::Loss
    }
}

/// Run one randomized completion of the table.
///
/// The deck is refilled minus the known cards, opponents and the board are
/// dealt from it, and every drawn card is returned afterwards, leaving the
/// table exactly as it was.
pub fn run_trial<R: Rng + ?Sized>(table: &mut Table, rng: &mut R) -> TrialOutcome {
    table.reset_deck();
    let revealed = table.community.len();

    for opponent in table.players.iter_mut().skip(1) {
        debug_assert!(opponent.hole.is_empty(), "opponent holds cards before the deal");
        for _ in 0..HOLE_CARDS {
            opponent.hole.push(table.deck.draw_random(rng));
        }
    }
    while table.community.len() < BOARD_SIZE {
        table.community.push(table.deck.draw_random(rng));
    }

    let hero = best_hand_with_board(&table.players[0].hole, &table.community);
    let mut result = TrialResult::Win;
    for opponent in &table.players[1..] {
        match best_hand_with_board(&opponent.hole, &table.community).cmp(&hero) {
            Ordering::Greater => {
                result = TrialResult::Loss;
                break;
            }
            Ordering::Equal => result = TrialResult::Tie,
            Ordering::Less => {}
        }
    }

    for opponent in table.players.iter_mut().skip(1) {
        for card in opponent.hole.drain(..) {
            table.deck.insert(card);
        }
    }
    for card in table.community.drain(revealed..) {
        table.deck.insert(card);
    }

    TrialOutcome {
        result,
        hero_category: hero.category(),
    }
}
