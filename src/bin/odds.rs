//! Hold'em win-probability estimator.
//!
//! Usage:
//!   odds --hole AsKs --board QsJs2h --players 4 --trials 500000
//!   odds --config configs/ak_suited.json --output report.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use holdem_odds::cards::parse_cards;
use holdem_odds::sim::{ConfigError, SimulationConfig, SimulationReport, SimulationResult};
use holdem_odds::{Card, HandCategory};

#[derive(Parser, Debug)]
#[command(
    name = "odds",
    about = "Estimate a Texas Hold'em hand's win probability",
    long_about = "Deal the unknown cards at random many times and count how often the \
                  given hole cards are not beaten. Ties count as wins."
)]
struct Args {
    /// Hole cards, e.g. "AsKs"
    #[arg(long, required_unless_present = "config")]
    hole: Option<String>,

    /// Revealed community cards, e.g. "QsJs2h"
    #[arg(long)]
    board: Option<String>,

    /// Players at the table, including you (2-10)
    #[arg(short, long)]
    players: Option<usize>,

    /// Number of trials
    #[arg(short = 'n', long)]
    trials: Option<u64>,

    /// Worker threads (default: one per hardware thread)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; other flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log per-worker details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let simulator = match config.build_simulator() {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let bar = ProgressBar::new(simulator.trials_to_run());
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trials ({eta})")
    {
        bar.set_style(style.progress_chars("=> "));
    }

    let result = simulator.run_with_progress(|done| bar.set_position(done));
    bar.finish_and_clear();

    print_result(&result);

    if let Some(path) = &args.output {
        match SimulationReport::from_result(&result).save_json(path) {
            Ok(()) => info!("Report saved to {}", path.display()),
            Err(e) => {
                error!("Failed to save report to {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn build_config(args: &Args) -> Result<SimulationConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => {
            let config = SimulationConfig::from_json_file(path)?;
            info!("Loaded config from: {}", path.display());
            config
        }
        None => SimulationConfig::default(),
    };

    if let Some(hole) = &args.hole {
        config = config.with_hole_cards(parse_cards(hole)?);
    }
    if let Some(board) = &args.board {
        config = config.with_community(parse_cards(board)?);
    }
    if let Some(players) = args.players {
        config = config.with_players(players);
    }
    if let Some(trials) = args.trials {
        config = config.with_trials(trials);
    }
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    Ok(config)
}

fn print_result(result: &SimulationResult) {
    println!("=== Hold'em Odds ===");
    println!("Hole:    {}", join_cards(&result.hole_cards));
    if result.community_cards.is_empty() {
        println!("Board:   (none)");
    } else {
        println!("Board:   {}", join_cards(&result.community_cards));
    }
    println!("Players: {}", result.num_players);
    println!();
    println!("Win probability: {:.2}%", result.win_percentage());
    println!("  of which ties: {:.2}%", result.tie_fraction() * 100.0);
    println!(
        "Trials: {} of {} requested on {} threads",
        result.trials_run, result.trials_requested, result.threads
    );
    println!(
        "Time: {:.2}s ({:.0} trials/s)",
        result.elapsed_seconds,
        result.trials_per_second()
    );

    println!();
    println!("Your best hand:");
    for category in HandCategory::ALL.iter().rev() {
        let count = result.category_count(*category);
        if count > 0 {
            println!(
                "  {:<16} {:>6.2}%",
                category.name(),
                100.0 * count as f64 / result.trials_run as f64
            );
        }
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
