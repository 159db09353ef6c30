use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

use home_fit::listing::{BuyerProfile, House, PriorityMode};
use home_fit::scoring::ScoreResult;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_NO_RESULTS: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Ranked table (colored on a terminal)
    #[default]
    Table,
    /// Tab-separated values for scripting
    Tsv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every house in a file and list them best first
    Rank {
        /// YAML or JSON file with a list of houses
        houses: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Hide houses whose total is below this score
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },
    /// Score a single house and explain the result
    Score {
        /// YAML or JSON file with a list of houses
        houses: PathBuf,

        /// Which house to score (1-based, in file order)
        #[arg(short, long, default_value_t = 1)]
        index: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Interactively create a config file with your buyer profile
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "home-fit")]
#[command(about = "Score houses against your buying priorities", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/home-fit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the profile's priority mode for this run
    /// (balanced, budget-driven, safety-first, education-first)
    #[arg(short, long, global = true)]
    mode: Option<PriorityMode>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = cli.command {
        // Logging stays at the default level; the wizard talks on stdout.
        let _ = home_fit::telemetry::init(&home_fit::telemetry::resolve_level(cli.verbose, None));
        if let Err(e) = home_fit::config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let start_time = Instant::now();

    let config = match home_fit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let level = home_fit::telemetry::resolve_level(cli.verbose, config.log_level.as_deref());
    if let Err(e) = home_fit::telemetry::init(&level) {
        eprintln!("Logging error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let profile = match cli.mode {
        Some(mode) => {
            info!(%mode, "overriding priority mode from command line");
            config.profile.with_priority_mode(mode)
        }
        None => config.profile.clone(),
    };

    // Validate the buyer profile at startup
    if let Err(errors) = home_fit::scoring::validate_profile(&profile) {
        eprintln!("Buyer profile errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match cli.command {
        Commands::Rank {
            houses,
            format,
            min_score,
        } => {
            let houses = load_houses_or_exit(&houses);
            let house_count = houses.len();
            let mut results = score_all(&profile, &houses);

            if results.is_empty() && house_count > 0 {
                eprintln!("None of the {} houses could be scored.", house_count);
                std::process::exit(EXIT_NO_RESULTS);
            }

            // Best first; sort is stable so ties keep file order
            results.sort_by(|a, b| b.total_score.cmp(&a.total_score));

            if let Some(min) = min_score {
                results.retain(|r| r.total_score >= min);
                debug!(min, remaining = results.len(), "applied minimum score");
            }

            if cli.verbose && matches!(format, OutputFormat::Table) {
                let use_colors = home_fit::output::should_use_colors();
                for result in &results {
                    println!("{}", home_fit::output::format_house_detail(result, use_colors));
                    println!();
                }
            } else {
                print_results(&results, format);
            }

            info!(
                scored = results.len(),
                total = house_count,
                elapsed = ?start_time.elapsed(),
                "ranking complete"
            );
        }
        Commands::Score {
            houses,
            index,
            format,
        } => {
            let houses = load_houses_or_exit(&houses);

            // Validate index bounds (1-based)
            if index < 1 || index > houses.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    houses.len()
                );
                std::process::exit(EXIT_INPUT);
            }

            let house = &houses[index - 1];
            match home_fit::scoring::score(&profile, house) {
                Ok(result) => match format {
                    OutputFormat::Table => {
                        let use_colors = home_fit::output::should_use_colors();
                        println!("{}", home_fit::output::format_house_detail(&result, use_colors));
                    }
                    other => print_results(std::slice::from_ref(&result), other),
                },
                Err(e) => {
                    eprintln!("Cannot score {}: {}", house.display_address(), e);
                    std::process::exit(EXIT_NO_RESULTS);
                }
            }
        }
        Commands::Init => unreachable!("init is handled before config loading"),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_houses_or_exit(path: &std::path::Path) -> Vec<House> {
    match home_fit::listing::load_houses(path) {
        Ok(houses) => {
            debug!(count = houses.len(), path = %path.display(), "loaded houses");
            houses
        }
        Err(e) => {
            eprintln!("House file error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

/// Score each house, skipping (and reporting) the ones with bad input.
fn score_all(profile: &BuyerProfile, houses: &[House]) -> Vec<ScoreResult> {
    houses
        .iter()
        .enumerate()
        .filter_map(|(i, house)| match home_fit::scoring::score(profile, house) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(
                    index = i + 1,
                    house = %house.display_address(),
                    field = e.field(),
                    "skipping house: {}",
                    e
                );
                None
            }
        })
        .collect()
}

fn print_results(results: &[ScoreResult], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let use_colors = home_fit::output::should_use_colors();
            println!("{}", home_fit::output::format_scored_table(results, use_colors));
        }
        OutputFormat::Tsv => {
            let output = home_fit::output::format_tsv(results);
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        OutputFormat::Json => match home_fit::output::format_json(results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                std::process::exit(EXIT_NO_RESULTS);
            }
        },
    }
}
