//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::analysis::{AnalysisPipeline, AnalysisRecord};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;

/// Analyse a transcript and print the resulting record
pub async fn analyze_transcript(
    settings: &Settings,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let text = read_transcript(file)?;
    settings.ensure_dirs()?;

    let pipeline = AnalysisPipeline::new(settings);
    let analysis = pipeline
        .analyze(&text)
        .await
        .context("Transcript analysis failed")?;
    let summary = pipeline.summarize(&text);

    let record = AnalysisRecord::new(text, analysis, summary);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Words: {}", record.analysis.word_count);
    if record.analysis.action_items.is_empty() {
        println!("Action items: (none)");
    } else {
        println!("Action items:");
        for item in &record.analysis.action_items {
            println!("  - {}", item);
        }
    }
    if !record.analysis.keywords.is_empty() {
        println!("Keywords: {}", record.analysis.keywords.join(", "));
    }
    println!("Summary: {}", record.summary);

    Ok(())
}

/// Summarize a transcript
pub fn summarize_transcript(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let text = read_transcript(file)?;

    let pipeline = AnalysisPipeline::new(settings);
    println!("{}", pipeline.summarize(&text));

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(settings)?;
            println!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", Settings::config_path()?.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}

fn read_transcript(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read transcript from stdin")?;
            Ok(text)
        }
    }
}
