//! Command-line interface for anne_hoy.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Anne Hoy - play or watch the Tour of Anne Hoy
#[derive(Parser, Debug)]
#[command(name = "anne_hoy")]
#[command(about = "Multi-stool Tower of Hanoi with cheese", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle by hand on the console
    Play {
        /// Number of cheeses on the first stool
        #[arg(short, long)]
        cheeses: Option<u32>,

        /// Number of stools
        #[arg(short, long)]
        stools: Option<usize>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the minimal four-stool tour
    Tour {
        /// Number of cheeses on the first stool
        #[arg(short, long)]
        cheeses: Option<u32>,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print every intermediate state
        #[arg(short, long)]
        animate: bool,

        /// Pause between animated moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print the move sequence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print minimal four-stool move counts and their splits
    Cost {
        /// Largest pile size to list
        #[arg(long, default_value = "10")]
        up_to: usize,
    },
}
