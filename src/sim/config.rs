//! Simulation configuration.
//!
//! Configurations are plain serde structs that can be built in code with the
//! builder methods or loaded from JSON, e.g.
//!
//! ```json
//! {
//!   "num_players": 4,
//!   "hole_cards": ["As", "Ks"],
//!   "community_cards": ["Qs", "Js", "2h"],
//!   "trials": 100000,
//!   "seed": 7
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::runner::Simulator;
use super::table::{Table, BOARD_SIZE, HOLE_CARDS, MAX_PLAYERS, MIN_PLAYERS};
use crate::cards::{Card, ParseCardError};

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Inputs for one win-probability estimate.
///
/// # Example
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::sim::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_players(3)
///     .with_hole_cards(parse_cards("AsKs").unwrap());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of players at the table, including the reference player.
    pub num_players: usize,

    /// The reference player's two hole cards.
    pub hole_cards: Vec<Card>,

    /// Community cards already revealed (0-5).
    pub community_cards: Vec<Card>,

    /// Number of trials requested.
    ///
    /// Trials are split evenly across workers; any remainder is dropped.
    pub trials: u64,

    /// Number of worker threads. `None` uses one per hardware thread.
    pub num_threads: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// Worker `w` seeds its generator with `seed + w`. If `None`, every
    /// worker draws its seed from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            hole_cards: Vec::new(),
            community_cards: Vec::new(),
            trials: DEFAULT_TRIALS,
            num_threads: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the number of players.
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Builder method: set the reference player's hole cards.
    pub fn with_hole_cards(mut self, cards: Vec<Card>) -> Self {
        self.hole_cards = cards;
        self
    }

    /// Builder method: set the revealed community cards.
    pub fn with_community(mut self, cards: Vec<Card>) -> Self {
        self.community_cards = cards;
        self
    }

    /// Builder method: set the number of trials.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::InvalidPlayerCount(self.num_players));
        }

        if self.hole_cards.len() != HOLE_CARDS {
            return Err(ConfigError::InvalidHoleCardCount(self.hole_cards.len()));
        }

        if self.community_cards.len() > BOARD_SIZE {
            return Err(ConfigError::TooManyCommunityCards(self.community_cards.len()));
        }

        let known: Vec<Card> = self.known_cards().collect();
        for (i, card) in known.iter().enumerate() {
            if known[..i].contains(card) {
                return Err(ConfigError::DuplicateCard(*card));
            }
        }

        if self.trials == 0 {
            return Err(ConfigError::InvalidTrialCount(self.trials));
        }

        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount(0));
        }

        Ok(())
    }

    /// Hole cards followed by community cards.
    pub fn known_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hole_cards.iter().chain(&self.community_cards).copied()
    }

    /// Validate and deal the known cards onto a fresh table.
    pub fn build_table(&self) -> Result<Table, ConfigError> {
        self.validate()?;

        let mut table = Table::new(self.num_players)?;
        table.seat_hero(self.hole_cards[0], self.hole_cards[1])?;
        for &card in &self.community_cards {
            table.reveal(card)?;
        }
        Ok(table)
    }

    /// Validate and build a ready-to-run simulator.
    pub fn build_simulator(&self) -> Result<Simulator, ConfigError> {
        let mut simulator = Simulator::new(self.build_table()?, self.trials)?;
        if let Some(threads) = self.num_threads {
            simulator = simulator.with_threads(threads);
        }
        if let Some(seed) = self.seed {
            simulator = simulator.with_seed(seed);
        }
        Ok(simulator)
    }
}

/// Errors for invalid simulation setups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading a config file failed.
    IoError(String),
    /// A config file is not valid JSON for `SimulationConfig`.
    ParseError(String),
    /// A card label could not be parsed.
    InvalidCard(ParseCardError),
    /// Player count is outside 2-10.
    InvalidPlayerCount(usize),
    /// The reference player must hold exactly two cards.
    InvalidHoleCardCount(usize),
    /// More than five community cards.
    TooManyCommunityCards(usize),
    /// The same card appears twice among the known cards.
    DuplicateCard(Card),
    /// The card is no longer in the deck.
    CardUnavailable(Card),
    /// Trial count must be positive.
    InvalidTrialCount(u64),
    /// Thread count must be positive.
    InvalidThreadCount(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidCard(e) => write!(f, "{}", e),
            Self::InvalidPlayerCount(n) => {
                write!(f, "Invalid player count: {} (must be {}-{})", n, MIN_PLAYERS, MAX_PLAYERS)
            }
            Self::InvalidHoleCardCount(n) => {
                write!(f, "Invalid hole card count: {} (must be {})", n, HOLE_CARDS)
            }
            Self::TooManyCommunityCards(n) => {
                write!(f, "Too many community cards: {} (at most {})", n, BOARD_SIZE)
            }
            Self::DuplicateCard(card) => write!(f, "Card {} is listed more than once", card),
            Self::CardUnavailable(card) => write!(f, "Card {} is not in the deck", card),
            Self::InvalidTrialCount(n) => write!(f, "Invalid trial count: {} (must be positive)", n),
            Self::InvalidThreadCount(n) => write!(f, "Invalid thread count: {} (must be positive)", n),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCard(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseCardError> for ConfigError {
    fn from(e: ParseCardError) -> Self {
        Self::InvalidCard(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    const TEST_CONFIG: &str = r#"{
        "num_players": 4,
        "hole_cards": ["As", "Ks"],
        "community_cards": ["Qs", "Js", "2h"],
        "trials": 5000,
        "num_threads": 2,
        "seed": 7
    }"#;

    fn base() -> SimulationConfig {
        SimulationConfig::default().with_hole_cards(parse_cards("AsKs").unwrap())
    }

    #[test]
    fn test_parse_json() {
        let config = SimulationConfig::from_json_str(TEST_CONFIG).unwrap();
        assert_eq!(config.num_players, 4);
        assert_eq!(config.hole_cards, parse_cards("As Ks").unwrap());
        assert_eq!(config.community_cards.len(), 3);
        assert_eq!(config.trials, 5000);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_json_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"hole_cards": ["2c", "7d"]}"#).unwrap();
        assert_eq!(config.num_players, 2);
        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert!(config.community_cards.is_empty());
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            SimulationConfig::from_json_str("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json_str(r#"{"hole_cards": ["Zz", "7d"]}"#),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json_file("/nonexistent/config.json"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(base().validate().is_ok());

        assert_eq!(
            base().with_players(1).validate(),
            Err(ConfigError::InvalidPlayerCount(1))
        );
        assert_eq!(
            base().with_players(11).validate(),
            Err(ConfigError::InvalidPlayerCount(11))
        );
        assert_eq!(
            base().with_hole_cards(parse_cards("As").unwrap()).validate(),
            Err(ConfigError::InvalidHoleCardCount(1))
        );
        assert_eq!(
            base().with_community(parse_cards("2c3c4c5c6c7c").unwrap()).validate(),
            Err(ConfigError::TooManyCommunityCards(6))
        );
        assert_eq!(
            base().with_community(parse_cards("Ks").unwrap()).validate(),
            Err(ConfigError::DuplicateCard(parse_cards("Ks").unwrap()[0]))
        );
        assert_eq!(
            base().with_trials(0).validate(),
            Err(ConfigError::InvalidTrialCount(0))
        );
        assert_eq!(
            base().with_threads(0).validate(),
            Err(ConfigError::InvalidThreadCount(0))
        );
    }

    #[test]
    fn test_build_table() {
        let config = SimulationConfig::from_json_str(TEST_CONFIG).unwrap();
        let table = config.build_table().unwrap();
        assert_eq!(table.num_players(), 4);
        assert_eq!(table.hero().hole_cards(), &config.hole_cards[..]);
        assert_eq!(table.community(), &config.community_cards[..]);
        assert_eq!(table.deck().len(), 52 - 5);
    }

    #[test]
    fn test_build_simulator() {
        let config = SimulationConfig::from_json_str(TEST_CONFIG).unwrap();
        let simulator = config.build_simulator().unwrap();
        assert_eq!(simulator.num_workers(), 2);
        assert_eq!(simulator.trials_to_run(), 5000);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidPlayerCount(12);
        assert_eq!(err.to_string(), "Invalid player count: 12 (must be 2-10)");

        let err: ConfigError = "Xx".parse::<Card>().unwrap_err().into();
        assert!(matches!(err, ConfigError::InvalidCard(_)));
    }
}
