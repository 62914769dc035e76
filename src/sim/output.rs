//! Simulation report export.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::runner::SimulationResult;
use crate::eval::HandCategory;

/// How often the reference player finished with one hand category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFrequency {
    /// Category name, e.g. "Full House"
    pub category: String,
    /// Number of trials
    pub count: u64,
    /// Fraction of trials run
    pub frequency: f64,
}

/// Inputs the simulation ran with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInputs {
    /// Hole card labels
    pub hole_cards: Vec<String>,
    /// Known community card labels
    pub community_cards: Vec<String>,
    /// Players at the table
    pub num_players: usize,
    /// Trials requested
    pub trials_requested: u64,
    /// Worker threads
    pub threads: usize,
}

/// Headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResults {
    /// Trials actually run
    pub trials_run: u64,
    /// Trials won or tied
    pub wins: u64,
    /// Trials tied
    pub ties: u64,
    /// Wins over trials run, as a percentage
    pub win_percentage: f64,
    /// Ties over trials run, as a percentage
    pub tie_percentage: f64,
    /// Wall-clock seconds
    pub elapsed_seconds: f64,
}

/// Complete simulation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// What was simulated
    pub inputs: ReportInputs,
    /// Aggregated outcome
    pub results: ReportResults,
    /// Reference player's best-hand categories, weakest first
    pub categories: Vec<CategoryFrequency>,
    /// Seconds since the Unix epoch when the report was built
    pub timestamp: u64,
}

impl SimulationReport {
    /// Build a report from a finished simulation.
    pub fn from_result(result: &SimulationResult) -> Self {
        let categories = HandCategory::ALL
            .iter()
            .map(|&category| {
                let count = result.category_count(category);
                CategoryFrequency {
                    category: category.name().to_string(),
                    count,
                    frequency: fraction(count, result.trials_run),
                }
            })
            .collect();

        Self {
            inputs: ReportInputs {
                hole_cards: result.hole_cards.iter().map(|c| c.to_string()).collect(),
                community_cards: result.community_cards.iter().map(|c| c.to_string()).collect(),
                num_players: result.num_players,
                trials_requested: result.trials_requested,
                threads: result.threads,
            },
            results: ReportResults {
                trials_run: result.trials_run,
                wins: result.wins,
                ties: result.ties,
                win_percentage: result.win_percentage(),
                tie_percentage: result.tie_fraction() * 100.0,
                elapsed_seconds: result.elapsed_seconds,
            },
            categories,
            timestamp: unix_timestamp(),
        }
    }

    /// Frequency for a category name.
    pub fn category(&self, name: &str) -> Option<&CategoryFrequency> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

fn fraction(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::sim::SimulationConfig;

    fn result() -> SimulationResult {
        SimulationConfig::default()
            .with_players(3)
            .with_hole_cards(parse_cards("As Ks").unwrap())
            .with_community(parse_cards("Qs Js Ts").unwrap())
            .with_trials(400)
            .with_threads(2)
            .with_seed(8)
            .build_simulator()
            .unwrap()
            .run()
    }

    #[test]
    fn test_report_from_result() {
        let result = result();
        let report = SimulationReport::from_result(&result);

        assert_eq!(report.inputs.hole_cards, vec!["As", "Ks"]);
        assert_eq!(report.inputs.community_cards, vec!["Qs", "Js", "Ts"]);
        assert_eq!(report.inputs.num_players, 3);
        assert_eq!(report.results.trials_run, 400);
        assert_eq!(report.results.win_percentage, 100.0);

        assert_eq!(report.categories.len(), HandCategory::COUNT);
        assert_eq!(report.categories[0].category, "High Card");
        let royal = report.category("Royal Flush").unwrap();
        assert_eq!(royal.count, 400);
        assert_eq!(royal.frequency, 1.0);
    }

    #[test]
    fn test_save_json() {
        let report = SimulationReport::from_result(&result());
        let path = std::env::temp_dir().join(format!("holdem_odds_report_{}.json", std::process::id()));

        report.save_json(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let loaded: SimulationReport = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.results.trials_run, report.results.trials_run);
        assert_eq!(loaded.categories, report.categories);
    }
}
