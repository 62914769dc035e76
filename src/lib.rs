//! # Hold'em Odds
//!
//! Monte Carlo estimation of a Texas Hold'em player's probability of winning
//! from their two hole cards and any community cards already revealed.
//!
//! ## Features
//!
//! - **Hand Evaluation**: Ten categories from high card to royal flush, with
//!   full tie-break ordering
//! - **Best Hand Selection**: Strongest five-card hand out of 5-7 cards
//! - **Parallel Simulation**: Trials split evenly across worker threads, each
//!   with its own deck copy and random number generator
//! - **Reproducible Runs**: Optional seed for deterministic results
//! - **JSON In/Out**: Load configurations and save reports as JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use holdem_odds::cards::parse_cards;
//! use holdem_odds::sim::SimulationConfig;
//!
//! let simulator = SimulationConfig::default()
//!     .with_players(4)
//!     .with_hole_cards(parse_cards("As Ks").unwrap())
//!     .with_community(parse_cards("Qs Js 2h").unwrap())
//!     .with_trials(200_000)
//!     .build_simulator()
//!     .unwrap();
//!
//! let result = simulator.run();
//! println!("{:.2}%", result.win_percentage());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │            Simulator (rayon workers)             │
//! │  - Even trial split    - Per-worker StdRng       │
//! │  - Progress counter    - Tally merge             │
//! └──────────────────────────────────────────────────┘
//!                          │ clones
//!                          ▼
//!          ┌──────────────────────────────┐
//!          │  Table: deck, players, board │──► run_trial
//!          └──────────────────────────────┘        │
//!                                                  ▼
//!                                   best_hand ─► Hand::evaluate
//! ```

#![warn(missing_docs)]

/// Cards, card labels and the deck.
pub mod cards;

/// Five-card hand scoring and best-hand selection.
pub mod eval;

/// Table setup, trials and the parallel simulator.
pub mod sim;

pub use cards::{Card, Deck};
pub use eval::{best_hand, compare_hands, evaluate_hand, Hand, HandCategory};
pub use sim::{run_simulation, SimulationConfig, SimulationResult, Simulator};
