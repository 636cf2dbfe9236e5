//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Economics study tutor
#[derive(Parser)]
#[command(name = "study")]
#[command(about = "Interactive microeconomics study tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the tutor a single question
    Ask {
        /// The question, e.g. "What is the law of demand?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Start an interactive Q&A session on stdin
    Chat {
        /// Print the chat history as JSON when the session ends
        #[arg(long)]
        json: bool,
    },

    /// Replay the teacher-student dialogue
    Dialogue {
        /// Pause after each line in milliseconds (overrides config)
        #[arg(long)]
        pace_ms: Option<u64>,
    },

    /// Print the numbered dialogue transcript
    Transcript,

    /// Explain one topic by name, e.g. "market_structures"
    Topic { name: String },

    /// List the topics the tutor knows
    Topics,

    /// Show video lectures, reference tables and exam tips
    Resources,

    /// Show what the course covers
    Overview,
}
