use clap::Parser;
use tracing::info;

use food_tier::cli::{Cli, Command};
use food_tier::data::{load_policy, load_profiles, load_reference, save_results};
use food_tier::error::Result;
use food_tier::interface::{display_reference_table, display_results};
use food_tier::models::{FoodProfile, FoodTierResult};
use food_tier::reference::ReferenceTable;
use food_tier::tiering::{TierPolicy, TieringEngine};

use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Evaluate {
            profile,
            reference,
            policy,
            meal,
            json,
            output,
        } => cmd_evaluate(
            &profile,
            reference.as_deref(),
            policy.as_deref(),
            meal,
            json,
            output,
        ),
        Command::Reference { reference, json } => cmd_reference(reference.as_deref(), json),
        Command::Policy => cmd_policy(),
    }
}

fn resolve_reference(path: Option<&Path>) -> Result<ReferenceTable> {
    match path {
        Some(p) => {
            info!(path = %p.display(), "loading reference overrides");
            load_reference(p)
        }
        None => Ok(ReferenceTable::builtin()),
    }
}

/// Evaluate every profile in a file (or the meal they form).
fn cmd_evaluate(
    profile_path: &Path,
    reference_path: Option<&Path>,
    policy_path: Option<&Path>,
    meal: bool,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let reference = resolve_reference(reference_path)?;
    let policy = match policy_path {
        Some(p) => load_policy(p)?,
        None => TierPolicy::default(),
    };
    let engine = TieringEngine::new(policy)?;

    let mut profiles = load_profiles(profile_path)?;
    info!(count = profiles.len(), path = %profile_path.display(), "loaded profiles");

    if meal {
        profiles = vec![FoodProfile::meal(&profiles)];
    }

    let results: Vec<FoodTierResult> = profiles
        .iter()
        .map(|p| engine.evaluate(p, &reference))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display_results(&results);
    }

    if let Some(path) = output {
        save_results(&path, &results)?;
        info!(path = %path.display(), "results written");
    }

    Ok(())
}

/// Print the built-in table, optionally with overrides applied.
fn cmd_reference(reference_path: Option<&Path>, json: bool) -> Result<()> {
    let table = resolve_reference(reference_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        display_reference_table(&table);
    }
    Ok(())
}

fn cmd_policy() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&TierPolicy::default())?);
    Ok(())
}
