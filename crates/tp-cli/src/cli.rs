//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tp_core::SeriesTag;

/// Bowling series tracker.
///
/// Records series of games and derives scores, collection statistics and
/// pin-coverage rates from them.
#[derive(Debug, Parser)]
#[command(name = "tenpin", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import series documents (JSON, one per line) from stdin or a file.
    Import {
        /// Read from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Export all stored series as JSON lines.
    Export,

    /// List stored series with their game totals.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete a series by ID.
    Delete {
        /// The series ID.
        id: String,
    },

    /// Show frame-by-frame scores for a series.
    Score {
        /// The series ID.
        series: String,

        /// Only this game (1-based position within the series).
        #[arg(long)]
        game: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Collection statistics across stored series.
    Stats {
        /// Only series with this tag.
        #[arg(long)]
        tag: Option<SeriesTag>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Pin-combination coverage for a set of target pins.
    Coverage {
        /// Target pins the first ball should leave standing, e.g. 7,10.
        #[arg(long, value_delimiter = ',', required = true)]
        pins: Vec<u8>,

        /// Only series with this tag.
        #[arg(long)]
        tag: Option<SeriesTag>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show backend and store summary.
    Status,
}
