//! Frequency-based extractive summarization

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Returned when the text yields no summary sentences.
pub const NO_SUMMARY: &str = "No summary available";

/// Returned when summarization itself fails. Callers never see the error.
pub const ERROR_SUMMARY: &str = "Error generating summary";

#[derive(Error, Debug)]
pub enum SummarizationError {
    #[error("sentence count must be at least 1")]
    InvalidSentenceCount,
}

/// Extractive summarizer scoring sentences by term frequency
///
/// No semantic understanding: a sentence's score is the summed document
/// frequency of its significant terms (lowercased words minus stopwords).
pub struct Summarizer {
    stopwords: HashSet<String>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self { stopwords }
    }

    /// Summarize `text` into at most `sentence_count` sentences, emitted in
    /// original document order.
    ///
    /// Never fails outward: internal errors collapse to [`ERROR_SUMMARY`]
    /// and an empty selection collapses to [`NO_SUMMARY`].
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        match self.summarize_inner(text, sentence_count) {
            Ok(summary) if summary.is_empty() => NO_SUMMARY.to_string(),
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Summarization failed: {}", e);
                ERROR_SUMMARY.to_string()
            }
        }
    }

    fn summarize_inner(
        &self,
        text: &str,
        sentence_count: usize,
    ) -> Result<String, SummarizationError> {
        if sentence_count == 0 {
            return Err(SummarizationError::InvalidSentenceCount);
        }

        let sentences: Vec<&str> = text
            .split_sentence_bounds()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if sentences.is_empty() {
            return Ok(String::new());
        }

        // Document-wide term frequencies over significant words.
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for sentence in &sentences {
            for term in self.significant_terms(sentence) {
                *frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let scores: Vec<usize> = sentences
            .iter()
            .map(|sentence| {
                self.significant_terms(sentence)
                    .filter_map(|term| frequencies.get(&term))
                    .sum()
            })
            .collect();

        // Top N by score, ties broken towards earlier sentences, then
        // re-emitted in document order.
        let mut ranked: Vec<usize> = (0..sentences.len()).collect();
        ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then(a.cmp(&b)));
        let mut selected: Vec<usize> = ranked.into_iter().take(sentence_count).collect();
        selected.sort_unstable();

        Ok(selected
            .into_iter()
            .map(|i| sentences[i].trim())
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn significant_terms<'a>(&'a self, sentence: &'a str) -> impl Iterator<Item = String> + 'a {
        sentence
            .unicode_words()
            .map(str::to_lowercase)
            .filter(|word| word.chars().any(char::is_alphabetic))
            .filter(|word| !self.stopwords.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_no_summary_sentinel() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize("", 3), NO_SUMMARY);
        assert_eq!(summarizer.summarize("   \n ", 3), NO_SUMMARY);
    }

    #[test]
    fn zero_sentence_count_returns_error_sentinel() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize("Some text here.", 0), ERROR_SUMMARY);
    }

    #[test]
    fn short_text_is_returned_whole() {
        let summarizer = Summarizer::new();
        let text = "The budget review is tomorrow.";
        assert_eq!(summarizer.summarize(text, 3), text);
    }

    #[test]
    fn selects_top_sentences_in_document_order() {
        let summarizer = Summarizer::new();
        // "budget" repeats, so the two budget sentences outscore the aside.
        let text = "The budget needs a final review before Friday. \
                    My lunch was fine. \
                    Finance wants the budget review finished this budget cycle. \
                    The weather is nice.";
        let summary = summarizer.summarize(text, 2);
        let budget_first = summary.find("The budget needs").unwrap_or(usize::MAX);
        let budget_second = summary.find("Finance wants").unwrap_or(usize::MAX);
        assert!(budget_first < budget_second, "summary was: {summary}");
        assert!(!summary.contains("lunch"));
        assert!(!summary.contains("weather"));
    }

    #[test]
    fn never_panics_on_odd_input() {
        let summarizer = Summarizer::new();
        for text in ["....", "\u{0}\u{0}", "a", "🎉 🎉 🎉", "word"] {
            let summary = summarizer.summarize(text, 3);
            assert!(!summary.is_empty());
        }
    }
}
