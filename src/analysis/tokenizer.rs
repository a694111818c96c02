//! Word-level tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Split raw text into word tokens.
///
/// Tokens follow Unicode word boundaries: words (including contractions and
/// number-word mixes) and punctuation marks are kept as separate tokens,
/// whitespace runs are dropped. Original order is preserved and empty input
/// yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}
