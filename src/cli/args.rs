//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// takeaway - Transcript analysis for meeting notes
#[derive(Parser, Debug)]
#[command(name = "takeaway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse a transcript and print the resulting record
    Analyze {
        /// Transcript file to analyse (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a transcript
    Summarize {
        /// Transcript file to summarize (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
