//! Parallel Monte Carlo simulation.
//!
//! Trials are split evenly across workers. Each worker gets its own copy of
//! the table and its own random number generator, runs its share of trials
//! sequentially and returns a local tally; the tallies are summed after all
//! workers finish. Workers share nothing but a progress counter.
//!
//! Trials that do not divide evenly across workers are dropped: asking for
//! `n` trials on `t` workers runs `(n / t) * t` of them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{ConfigError, SimulationConfig};
use super::table::{Table, HOLE_CARDS};
use super::trial::{run_trial, TrialOutcome, TrialResult};
use crate::cards::Card;
use crate::eval::HandCategory;

/// Trials a worker runs between progress reports.
const PROGRESS_BATCH: u64 = 1_000;

/// Monte Carlo win-probability estimator for a prepared table.
#[derive(Debug, Clone)]
pub struct Simulator {
    table: Table,
    trials: u64,
    num_threads: Option<usize>,
    seed: Option<u64>,
}

impl Simulator {
    /// Create a simulator for a table whose reference player is seated.
    pub fn new(table: Table, trials: u64) -> Result<Self, ConfigError> {
        let hole = table.hero().hole_cards().len();
        if hole != HOLE_CARDS {
            return Err(ConfigError::InvalidHoleCardCount(hole));
        }
        if trials == 0 {
            return Err(ConfigError::InvalidTrialCount(trials));
        }
        Ok(Self {
            table,
            trials,
            num_threads: None,
            seed: None,
        })
    }

    /// Builder method: set number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads.max(1));
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The table trials start from.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Number of trials requested.
    pub fn trials_requested(&self) -> u64 {
        self.trials
    }

    /// Number of workers, capped so each runs at least one trial.
    pub fn num_workers(&self) -> usize {
        let threads = self.num_threads.unwrap_or_else(rayon::current_num_threads).max(1);
        let cap = usize::try_from(self.trials).unwrap_or(usize::MAX);
        threads.min(cap)
    }

    /// Trials each worker runs.
    pub fn trials_per_worker(&self) -> u64 {
        self.trials / self.num_workers() as u64
    }

    /// Trials actually run once the remainder is dropped.
    pub fn trials_to_run(&self) -> u64 {
        self.trials_per_worker() * self.num_workers() as u64
    }

    /// Run all trials.
    pub fn run(&self) -> SimulationResult {
        self.run_with_progress(|_| {})
    }

    /// Run all trials, calling `on_progress` with the number of trials
    /// completed so far across all workers.
    ///
    /// The callback is invoked from worker threads every few hundred trials
    /// per worker and once more when each worker finishes.
    pub fn run_with_progress<F>(&self, on_progress: F) -> SimulationResult
    where
        F: Fn(u64) + Sync,
    {
        let workers = self.num_workers();
        let per_worker = self.trials_per_worker();
        let dropped = self.trials - self.trials_to_run();

        info!(
            "Simulating {} trials on {} workers ({} each) for {} players",
            self.trials_to_run(),
            workers,
            per_worker,
            self.table.num_players()
        );
        if dropped > 0 {
            info!("Dropping {} trials that do not divide evenly across workers", dropped);
        }

        let start = Instant::now();
        let completed = AtomicU64::new(0);
        let report = |batch: u64| {
            let done = completed.fetch_add(batch, Ordering::Relaxed) + batch;
            on_progress(done);
        };

        let tallies: Vec<Tally> = (0..workers)
            .into_par_iter()
            .map(|worker| {
                let mut table = self.table.clone();
                let mut rng = self.worker_rng(worker);
                let mut tally = Tally::default();

                for i in 1..=per_worker {
                    tally.record(run_trial(&mut table, &mut rng));
                    if i % PROGRESS_BATCH == 0 {
                        report(PROGRESS_BATCH);
                    }
                }
                if per_worker % PROGRESS_BATCH != 0 {
                    report(per_worker % PROGRESS_BATCH);
                }

                debug!(
                    "Worker {} finished: {} wins, {} ties, {} losses",
                    worker, tally.wins, tally.ties, tally.losses
                );
                tally
            })
            .collect();

        let total = tallies.into_iter().fold(Tally::default(), Tally::merge);
        let elapsed = start.elapsed().as_secs_f64();

        let result = SimulationResult {
            hole_cards: self.table.hero().hole_cards().to_vec(),
            community_cards: self.table.community().to_vec(),
            num_players: self.table.num_players(),
            wins: total.wins + total.ties,
            ties: total.ties,
            trials_requested: self.trials,
            trials_run: total.trials(),
            threads: workers,
            category_counts: total.categories,
            elapsed_seconds: elapsed,
        };

        info!(
            "Win probability {:.2}% over {} trials in {:.2}s",
            result.win_percentage(),
            result.trials_run,
            elapsed
        );
        result
    }

    fn worker_rng(&self, worker: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Per-worker trial counts.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
    categories: [u64; HandCategory::COUNT],
}

impl Tally {
    fn record(&mut self, outcome: TrialOutcome) {
        match outcome.result {
            TrialResult::Win => self.wins += 1,
            TrialResult::Tie => self.ties += 1,
            TrialResult::Loss => self.losses += 1,
        }
        self.categories[outcome.hero_category.index()] += 1;
    }

    fn merge(mut self, other: Tally) -> Tally {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        for (total, count) in self.categories.iter_mut().zip(other.categories) {
            *total += count;
        }
        self
    }

    fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
}

/// Aggregated result of a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The reference player's hole cards.
    pub hole_cards: Vec<Card>,
    /// Community cards known before the simulation.
    pub community_cards: Vec<Card>,
    /// Players at the table.
    pub num_players: usize,
    /// Trials the reference player was not beaten in (ties included).
    pub wins: u64,
    /// Trials that ended in a tie for the best hand (subset of `wins`).
    pub ties: u64,
    /// Trials asked for.
    pub trials_requested: u64,
    /// Trials actually run.
    pub trials_run: u64,
    /// Workers used.
    pub threads: usize,
    /// How often the reference player's best hand fell in each category,
    /// indexed by `HandCategory::index`.
    pub category_counts: [u64; HandCategory::COUNT],
    /// Wall-clock time in seconds.
    pub elapsed_seconds: f64,
}

impl SimulationResult {
    /// Fraction of trials won or tied, 0.0 to 1.0.
    pub fn win_fraction(&self) -> f64 {
        if self.trials_run == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials_run as f64
    }

    /// Win fraction as a percentage.
    pub fn win_percentage(&self) -> f64 {
        self.win_fraction() * 100.0
    }

    /// Fraction of trials that were ties.
    pub fn tie_fraction(&self) -> f64 {
        if self.trials_run == 0 {
            return 0.0;
        }
        self.ties as f64 / self.trials_run as f64
    }

    /// Times the reference player's best hand was `category`.
    pub fn category_count(&self, category: HandCategory) -> u64 {
        self.category_counts[category.index()]
    }

    /// Trials per second.
    pub fn trials_per_second(&self) -> f64 {
        if self.elapsed_seconds > 0.0 {
            self.trials_run as f64 / self.elapsed_seconds
        } else {
            0.0
        }
    }
}

/// Estimate the reference player's win probability.
///
/// Deals `hole` to the reference player and `community` to the board, then
/// runs `trials` random completions against `num_players - 1` opponents on
/// one worker per hardware thread.
pub fn run_simulation(
    hole: [Card; HOLE_CARDS],
    community: &[Card],
    num_players: usize,
    trials: u64,
) -> Result<SimulationResult, ConfigError> {
    let simulator = SimulationConfig::default()
        .with_players(num_players)
        .with_hole_cards(hole.to_vec())
        .with_community(community.to_vec())
        .with_trials(trials)
        .build_simulator()?;
    Ok(simulator.run())
}
