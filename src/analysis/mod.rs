//! Text analysis for takeaway
//!
//! The pipeline turns one raw transcript into token statistics, candidate
//! action items (verb-tagged tokens), ranked keywords from an external
//! scoring worker, and a short extractive summary.

mod action_items;
mod keywords;
mod lexicon;
mod models;
mod pipeline;
mod summarizer;
mod tagger;
mod tokenizer;

pub use action_items::extract_action_items;
pub use keywords::{
    KeywordExtractionError, KeywordProvider, WorkerKeywordExtractor,
};
pub use models::{AnalysisRecord, AnalysisResult};
pub use pipeline::AnalysisPipeline;
pub use summarizer::{Summarizer, ERROR_SUMMARY, NO_SUMMARY};
pub use tagger::{PosTag, PosTagger, TaggedToken, TaggerModel};
pub use tokenizer::tokenize;
