//! Data models for analysis results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured analysis of one transcript
///
/// Invariants: `word_count == tokens.len()`, and `action_items` is the
/// verb-tagged subsequence of `tokens` with relative order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total number of tokens in the transcript
    pub word_count: usize,

    /// Tokens in original order
    pub tokens: Vec<String>,

    /// Verb-tagged tokens, order and duplicates preserved
    pub action_items: Vec<String>,

    /// Keywords from the scoring worker, rank order significant
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// The zeroed result used for blank input.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A fully analysed transcript, in the shape the notes application persists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Unique identifier (UUID)
    pub id: String,

    /// The raw transcript text
    pub text: String,

    /// Structured analysis
    pub analysis: AnalysisResult,

    /// Generated summary, always a non-empty string
    pub summary: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Create a new record for an analysed transcript
    pub fn new(text: String, analysis: AnalysisResult, summary: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            analysis,
            summary,
            created_at: Utc::now(),
        }
    }
}
