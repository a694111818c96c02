//! takeaway - Transcript analysis for meeting notes
//!
//! Turns a saved meeting transcript into its "takeaways": token statistics,
//! candidate action items, ranked keywords, and a short extractive summary.

pub mod analysis;
pub mod cli;
pub mod config;

use thiserror::Error;

/// Main error type for takeaway
#[derive(Error, Debug)]
pub enum TakeawayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Keyword extraction error: {0}")]
    KeywordExtraction(#[from] analysis::KeywordExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TakeawayError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "takeaway";
