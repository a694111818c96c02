//! Analysis pipeline orchestration

use crate::analysis::action_items::extract_action_items;
use crate::analysis::keywords::{KeywordProvider, WorkerKeywordExtractor};
use crate::analysis::models::AnalysisResult;
use crate::analysis::summarizer::Summarizer;
use crate::analysis::tagger::{PosTagger, TaggerModel};
use crate::analysis::tokenizer::tokenize;
use crate::config::Settings;

/// Analysis pipeline for saved transcripts
///
/// One instance can serve any number of calls; the only shared state is the
/// read-only tagger model. Concurrent `analyze` calls are independent and
/// each spawns its own keyword worker.
pub struct AnalysisPipeline {
    tagger: PosTagger,
    keywords: Box<dyn KeywordProvider>,
    summarizer: Summarizer,
    summary_sentences: usize,
}

impl AnalysisPipeline {
    /// Create a pipeline backed by the configured keyword worker.
    pub fn new(settings: &Settings) -> Self {
        Self::with_keyword_provider(
            Box::new(WorkerKeywordExtractor::from_settings(settings)),
            settings.summary.sentence_count,
        )
    }

    /// Create a pipeline with a custom keyword provider, e.g. an in-process
    /// scorer or a test double.
    pub fn with_keyword_provider(
        keywords: Box<dyn KeywordProvider>,
        summary_sentences: usize,
    ) -> Self {
        Self {
            tagger: PosTagger::new(TaggerModel::shared()),
            keywords,
            summarizer: Summarizer::new(),
            summary_sentences,
        }
    }

    /// Analyse one transcript into tokens, action items, and keywords.
    ///
    /// Blank input short-circuits to an empty result without running any
    /// stage (in particular, no worker process is spawned). A keyword
    /// extraction failure fails the whole call; no partial result is
    /// returned.
    pub async fn analyze(&self, text: &str) -> crate::Result<AnalysisResult> {
        if text.trim().is_empty() {
            tracing::debug!("Blank transcript, skipping analysis");
            return Ok(AnalysisResult::empty());
        }

        let tokens = tokenize(text);
        let tagged = self.tagger.tag(&tokens);
        let action_items = extract_action_items(&tagged);

        let keywords = self.keywords.extract_keywords(text).await?;

        tracing::info!(
            "Analysis complete: {} tokens, {} action items, {} keywords",
            tokens.len(),
            action_items.len(),
            keywords.len()
        );

        Ok(AnalysisResult {
            word_count: tokens.len(),
            tokens,
            action_items,
            keywords,
        })
    }

    /// Summarize one transcript. Never fails: degraded outcomes are the
    /// sentinel strings, unlike `analyze` which propagates keyword errors.
    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize(text, self.summary_sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::{KeywordExtractionError, KeywordProvider};
    use crate::TakeawayError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedKeywords {
        keywords: Vec<String>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl KeywordProvider for FixedKeywords {
        async fn extract_keywords(
            &self,
            _text: &str,
        ) -> Result<Vec<String>, KeywordExtractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.keywords.clone())
        }
    }

    struct FailingKeywords;

    #[async_trait]
    impl KeywordProvider for FailingKeywords {
        async fn extract_keywords(
            &self,
            _text: &str,
        ) -> Result<Vec<String>, KeywordExtractionError> {
            Err(KeywordExtractionError::Worker("no model loaded".to_string()))
        }
    }

    fn pipeline_with(keywords: Vec<&str>, calls: Arc<AtomicUsize>) -> AnalysisPipeline {
        AnalysisPipeline::with_keyword_provider(
            Box::new(FixedKeywords {
                keywords: keywords.into_iter().map(String::from).collect(),
                calls,
            }),
            3,
        )
    }

    #[tokio::test]
    async fn analyze_merges_all_stages() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = pipeline_with(vec!["meeting", "budget", "deadline"], calls.clone());

        let result = pipeline
            .analyze("Please submit the report and review the budget.")
            .await
            .expect("analysis should succeed");

        assert_eq!(result.word_count, result.tokens.len());
        assert_eq!(result.action_items, vec!["submit", "review"]);
        assert_eq!(result.keywords, vec!["meeting", "budget", "deadline"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_input_short_circuits_without_worker_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = pipeline_with(vec!["unused"], calls.clone());

        for text in ["", "   ", "\n\t"] {
            let result = pipeline.analyze(text).await.expect("blank input is not an error");
            assert_eq!(result, AnalysisResult::empty());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn keyword_failure_fails_the_whole_call() {
        let pipeline = AnalysisPipeline::with_keyword_provider(Box::new(FailingKeywords), 3);

        let err = pipeline
            .analyze("Review the budget.")
            .await
            .expect_err("keyword failure must propagate");
        assert!(matches!(err, TakeawayError::KeywordExtraction(_)));
    }

    #[tokio::test]
    async fn action_items_are_a_subsequence_of_tokens() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = pipeline_with(vec![], calls);

        let result = pipeline
            .analyze("We will schedule a call, then send the notes and fix the agenda.")
            .await
            .expect("analysis should succeed");

        let mut cursor = result.tokens.iter();
        for item in &result.action_items {
            assert!(
                cursor.any(|token| token == item),
                "{item} out of order relative to tokens"
            );
        }
    }

    #[test]
    fn summarize_never_fails() {
        let pipeline = AnalysisPipeline::with_keyword_provider(Box::new(FailingKeywords), 3);
        let summary = pipeline.summarize("");
        assert_eq!(summary, crate::analysis::NO_SUMMARY);
    }
}
