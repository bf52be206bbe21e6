use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutriPlan — derive nutrition targets and build daily meal plans.
#[derive(Parser, Debug)]
#[command(name = "nutriplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the app state JSON file.
    #[arg(short, long, default_value = "nutriplan.json")]
    pub file: String,

    /// Path to the progress history JSON file.
    #[arg(long, default_value = "progress.json")]
    pub progress_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a daily meal plan from your profile and preferences.
    Plan {
        /// Seed the template selection for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Set up (or redo) your profile, goals, and food preferences.
    Onboard,

    /// Record which of today's planned meals you completed.
    Log,

    /// Show adherence history, weekly stats, and streaks.
    Progress {
        /// How many weeks of summary to include.
        #[arg(long, default_value_t = 4)]
        weeks: u32,
    },

    /// List the food catalog, optionally importing custom foods from CSV.
    Foods {
        /// CSV file of custom foods to merge into the catalog.
        #[arg(long)]
        import: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { seed: None }
    }
}
