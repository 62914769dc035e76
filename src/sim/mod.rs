//! Monte Carlo win-probability simulation.
//!
//! A [`Table`] holds what is known: the reference player's hole cards, any
//! revealed community cards and the remaining deck. Each trial deals the
//! unknown cards at random and checks whether the reference player is beaten.
//! [`Simulator`] runs trials in parallel and aggregates the results.
//!
//! ## Modules
//!
//! - `config`: JSON/builder configuration and setup errors
//! - `table`: Deck, players and community cards
//! - `trial`: One randomized completion of the table
//! - `runner`: Parallel trial execution and aggregation
//! - `output`: JSON report export

pub mod config;
pub mod output;
pub mod runner;
pub mod table;
pub mod trial;

pub use config::{ConfigError, SimulationConfig, DEFAULT_TRIALS};
pub use output::SimulationReport;
pub use runner::{run_simulation, SimulationResult, Simulator};
pub use table::{Player, Table, BOARD_SIZE, HOLE_CARDS, MAX_PLAYERS, MIN_PLAYERS};
pub use trial::{run_trial, TrialOutcome, TrialResult};
