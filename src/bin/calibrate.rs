use std::path::PathBuf;

use clap::Parser;

use food_tier::calibration::{
    print_histogram, run_calibration, write_reports, CalibrationConfig, SampleRanges,
};
use food_tier::data::{load_policy, load_reference};
use food_tier::reference::ReferenceTable;
use food_tier::tiering::{TierPolicy, TieringEngine};

#[derive(Parser, Debug)]
#[command(name = "calibrate")]
#[command(about = "Score distribution report for a tier policy")]
struct Args {
    /// Number of random profiles to grade
    #[arg(long, default_value = "1000")]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Maximum nutrients listed per profile
    #[arg(long, default_value = "8")]
    max_components: usize,

    /// Tier policy JSON to calibrate (defaults if omitted)
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Reference table JSON layered over the built-in daily values
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Output CSV file for all samples
    #[arg(long, default_value = "calibration_samples.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "calibration_summary.json")]
    json: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let policy = match &args.policy {
        Some(path) => match load_policy(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading policy {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => TierPolicy::default(),
    };

    let reference = match &args.reference {
        Some(path) => match load_reference(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading reference table {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ReferenceTable::builtin(),
    };

    let engine = match TieringEngine::new(policy) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = CalibrationConfig {
        samples: args.samples,
        seed: args.seed,
        ranges: SampleRanges {
            components: (1, args.max_components),
            ..Default::default()
        },
    };

    let report = run_calibration(&config, &engine, &reference);
    print_histogram(&report);

    if write_reports(&report, &args.csv, &args.json).is_err() {
        std::process::exit(1);
    }
}
