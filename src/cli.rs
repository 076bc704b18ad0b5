use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// food-tier: grade food and meal nutrition profiles from S to F.
#[derive(Parser, Debug)]
#[command(name = "food-tier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one or more food profiles from a JSON file.
    Evaluate {
        /// Path to a profile JSON file (a single profile or an array).
        #[arg(short, long)]
        profile: PathBuf,

        /// Reference table JSON layered over the built-in daily values.
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Tier policy JSON; omitted fields use the defaults.
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Combine all profiles in the file into one meal.
        #[arg(long)]
        meal: bool,

        /// Print results as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also write the results as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective reference table.
    Reference {
        /// Reference table JSON layered over the built-in daily values.
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the default tier policy as JSON.
    Policy,
}
