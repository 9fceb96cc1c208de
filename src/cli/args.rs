//! Command line argument parsing for the Orthus CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Orthus - an edit-distance spell checker with a custom hash table core
#[derive(Parser, Debug, Clone)]
#[command(name = "orthus")]
#[command(about = "An edit-distance spell checker built on an open-addressing hash table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthusArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a single word and print suggestions
    Check(CheckArgs),

    /// Interactive spell-checking session
    Repl(ReplArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking a single word
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// The word to check
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Arguments for showing dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
