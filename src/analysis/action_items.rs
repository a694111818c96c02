//! Action item extraction

use crate::analysis::tagger::TaggedToken;

/// Collect verb-tagged tokens as candidate action items.
///
/// Order and duplicates are preserved from the tagged sequence; there is no
/// minimum-length or stop-word filtering.
pub fn extract_action_items(tagged: &[TaggedToken]) -> Vec<String> {
    tagged
        .iter()
        .filter(|t| t.tag.is_verb())
        .map(|t| t.token.clone())
        .collect()
}
