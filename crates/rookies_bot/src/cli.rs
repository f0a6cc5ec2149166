//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rookies-bot - weekly penalty announcements and race setup for the league
#[derive(Parser, Debug)]
#[command(name = "rookies-bot")]
#[command(about = "Weekly penalty announcements and race setup for the league", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Bot settings file
    #[arg(short, long, global = true, default_value = "config.yml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Post the stewards' penalties for the coming round and pin them
    AnnouncePenalties {
        /// Round file with this week's penalties
        round: PathBuf,
    },

    /// Create the briefing doc, announce race day, schedule the briefing
    /// and seed next week's round file
    RaceSetup {
        /// Round file with this week's penalties
        round: PathBuf,
    },
}

impl Commands {
    /// Round file the command operates on.
    pub fn round_path(&self) -> &PathBuf {
        match self {
            Commands::AnnouncePenalties { round } | Commands::RaceSetup { round } => round,
        }
    }
}
