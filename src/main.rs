//! takeaway - Transcript analysis for meeting notes
//!
//! Entry point for the takeaway CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use takeaway::cli::{Cli, Commands};
use takeaway::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            takeaway::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Analyze { file, json } => {
                    takeaway::cli::commands::analyze_transcript(&settings, file, json).await?;
                }
                Commands::Summarize { file } => {
                    takeaway::cli::commands::summarize_transcript(&settings, file)?;
                }
                Commands::Config(config_cmd) => {
                    takeaway::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
