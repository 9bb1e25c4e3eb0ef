//! CLI module for Recap.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand, ValueEnum};

/// Recap - YouTube video summaries
///
/// Fetches a video's English captions and asks a language model for a bullet-point summary.
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a YouTube video from its transcript
    Summarize {
        /// YouTube URL (watch?v=... or youtu.be/...)
        url: String,

        /// Completion model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the flattened transcript of a YouTube video
    Transcript {
        /// YouTube URL (watch?v=... or youtu.be/...)
        url: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON object with the outcome
    Json,
}
