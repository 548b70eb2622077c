//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap. Keeps argument parsing
//! separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI-Q tracker CLI
#[derive(Parser)]
#[command(name = "aiqctl")]
#[command(about = "AI-Q tracker - gamified progress for the AI Director docs", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the progress file (overrides $AIQ_STATE_FILE and defaults)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the AI-Q dashboard: score, rank, points, styling tiers
    Status {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show the learning path with per-level card states
    Path,

    /// Finalize a milestone and award its points
    Complete {
        /// Milestone id, e.g. level_0
        milestone: String,

        /// Points to award (default 5)
        #[arg(long)]
        points: Option<u64>,

        /// Unlock this level instead of the fixed successor
        #[arg(long)]
        unlock: Option<String>,
    },

    /// Earn provisional points (not scored until committed)
    Earn {
        /// How many points
        amount: u64,

        /// Where the points came from
        #[arg(long, default_value = "reading")]
        source: String,
    },

    /// Take back provisional points (floored at zero)
    Retract {
        /// How many points
        amount: u64,
    },

    /// Commit provisional points into the score
    Commit {
        /// Amount to commit; omit to commit the whole balance
        amount: Option<u64>,
    },

    /// Discard the provisional balance without scoring it
    Discard,

    /// Award committed points directly, bypassing the provisional buffer
    Award {
        /// How many points
        amount: u64,

        /// Where the points came from
        #[arg(long, default_value = "bonus")]
        source: String,
    },

    /// List unlocked achievements
    Achievements,

    /// Record an achievement badge (idempotent)
    Badge {
        /// Achievement id, e.g. completed_synthesis_challenge
        id: String,

        /// Free-form JSON context stored with the badge
        #[arg(long)]
        metadata: Option<String>,
    },

    /// Reset all progress back to defaults
    Reset {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}
