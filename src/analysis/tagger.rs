//! Rule-based part-of-speech tagging
//!
//! A small Brill-style tagger for English. A preloaded lexicon assigns each
//! token its most likely tag, unknown words get a shape-based guess with an
//! NN fallback, then an ordered set of contextual correction rules rewrites
//! tags using the surrounding sequence. Rules are applied rule-major, so
//! tagging depends on the whole sequence: re-tagging a sub-slice is not
//! guaranteed to reproduce the tags it had in the full sequence.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::LEXICON_ENTRIES;

/// Part-of-speech tag set (Penn-style, closed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Singular or mass noun
    #[serde(rename = "NN")]
    Nn,
    /// Plural noun
    #[serde(rename = "NNS")]
    Nns,
    /// Proper noun
    #[serde(rename = "NNP")]
    Nnp,
    /// Verb, base form
    #[serde(rename = "VB")]
    Vb,
    /// Verb, past tense
    #[serde(rename = "VBD")]
    Vbd,
    /// Verb, gerund or present participle
    #[serde(rename = "VBG")]
    Vbg,
    /// Verb, past participle
    #[serde(rename = "VBN")]
    Vbn,
    /// Verb, non-third-person singular present
    #[serde(rename = "VBP")]
    Vbp,
    /// Verb, third-person singular present
    #[serde(rename = "VBZ")]
    Vbz,
    /// Modal
    #[serde(rename = "MD")]
    Md,
    /// Adjective
    #[serde(rename = "JJ")]
    Jj,
    /// Adverb
    #[serde(rename = "RB")]
    Rb,
    /// Determiner
    #[serde(rename = "DT")]
    Dt,
    /// Preposition or subordinating conjunction
    #[serde(rename = "IN")]
    In,
    /// Infinitival "to"
    #[serde(rename = "TO")]
    To,
    /// Coordinating conjunction
    #[serde(rename = "CC")]
    Cc,
    /// Cardinal number
    #[serde(rename = "CD")]
    Cd,
    /// Personal pronoun
    #[serde(rename = "PRP")]
    Prp,
    /// Possessive pronoun
    #[serde(rename = "PRP$")]
    PrpPoss,
    /// Existential "there"
    #[serde(rename = "EX")]
    Ex,
    /// Interjection
    #[serde(rename = "UH")]
    Uh,
    /// Punctuation mark
    #[serde(rename = "PUNCT")]
    Punct,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nn => "NN",
            Self::Nns => "NNS",
            Self::Nnp => "NNP",
            Self::Vb => "VB",
            Self::Vbd => "VBD",
            Self::Vbg => "VBG",
            Self::Vbn => "VBN",
            Self::Vbp => "VBP",
            Self::Vbz => "VBZ",
            Self::Md => "MD",
            Self::Jj => "JJ",
            Self::Rb => "RB",
            Self::Dt => "DT",
            Self::In => "IN",
            Self::To => "TO",
            Self::Cc => "CC",
            Self::Cd => "CD",
            Self::Prp => "PRP",
            Self::PrpPoss => "PRP$",
            Self::Ex => "EX",
            Self::Uh => "UH",
            Self::Punct => "PUNCT",
        }
    }

    /// Verb family follows the VB tag-prefix convention. Modals are not
    /// verbs here, so "will" never counts as an action item.
    pub fn is_verb(&self) -> bool {
        self.as_str().starts_with("VB")
    }
}

/// A token paired with its assigned tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: PosTag,
}

/// The tagger's shared read-only state: lexicon plus rule set version.
///
/// Loading is paid once per process; every pipeline holds an `Arc` to the
/// same model and only ever reads from it.
#[derive(Debug)]
pub struct TaggerModel {
    lexicon: HashMap<&'static str, PosTag>,
}

impl TaggerModel {
    /// Build the model from the embedded lexicon.
    pub fn load() -> Self {
        Self {
            lexicon: LEXICON_ENTRIES.iter().copied().collect(),
        }
    }

    /// Process-wide shared instance.
    pub fn shared() -> Arc<TaggerModel> {
        static MODEL: OnceLock<Arc<TaggerModel>> = OnceLock::new();
        Arc::clone(MODEL.get_or_init(|| Arc::new(TaggerModel::load())))
    }

    /// Exact lookup first, then the lowercased form.
    fn lookup(&self, token: &str) -> Option<PosTag> {
        self.lexicon
            .get(token)
            .or_else(|| self.lexicon.get(token.to_lowercase().as_str()))
            .copied()
    }
}

/// Part-of-speech tagger over a shared [`TaggerModel`]
pub struct PosTagger {
    model: Arc<TaggerModel>,
}

impl PosTagger {
    pub fn new(model: Arc<TaggerModel>) -> Self {
        Self { model }
    }

    /// Assign one tag per token.
    ///
    /// Unknown tokens never fail: they get a shape-based guess, NN as the
    /// final fallback. Deterministic for a given model version.
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tags: Vec<PosTag> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                self.model
                    .lookup(token)
                    .unwrap_or_else(|| shape_guess(token, i == 0))
            })
            .collect();

        apply_context_rules(tokens, &mut tags);

        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken {
                token: token.clone(),
                tag,
            })
            .collect()
    }
}

/// Shape heuristics for words missing from the lexicon.
fn shape_guess(token: &str, sentence_initial: bool) -> PosTag {
    if token.chars().all(|c| c.is_ascii_punctuation()) {
        return PosTag::Punct;
    }
    if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return PosTag::Cd;
    }
    let lower = token.to_lowercase();
    if lower.len() > 4 && lower.ends_with("ing") {
        return PosTag::Vbg;
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return PosTag::Vbd;
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return PosTag::Rb;
    }
    if !sentence_initial && token.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Nnp;
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return PosTag::Nns;
    }
    PosTag::Nn
}

/// Ordered contextual correction rules, applied rule-major over the whole
/// sequence. Order matters: an earlier rule's rewrite feeds the later ones.
fn apply_context_rules(tokens: &[String], tags: &mut [PosTag]) {
    debug_assert_eq!(tokens.len(), tags.len());

    // 1. A verb directly after a determiner is being used as a noun.
    rewrite(tags, |prev, tag| {
        (prev == Some(PosTag::Dt) && tag.is_verb()).then_some(PosTag::Nn)
    });
    // 2. So is a base-form verb after a preposition.
    rewrite(tags, |prev, tag| {
        (prev == Some(PosTag::In) && tag == PosTag::Vb).then_some(PosTag::Nn)
    });
    // 3. A noun after infinitival "to" is a base-form verb.
    rewrite(tags, |prev, tag| {
        (prev == Some(PosTag::To) && matches!(tag, PosTag::Nn | PosTag::Nns))
            .then_some(PosTag::Vb)
    });
    // 4. A noun after a modal is a base-form verb.
    rewrite(tags, |prev, tag| {
        (prev == Some(PosTag::Md) && matches!(tag, PosTag::Nn | PosTag::Nns))
            .then_some(PosTag::Vb)
    });
    // 5. A singular noun right after a personal pronoun is a present-tense verb.
    rewrite(tags, |prev, tag| {
        (prev == Some(PosTag::Prp) && tag == PosTag::Nn).then_some(PosTag::Vbp)
    });
}

fn rewrite(tags: &mut [PosTag], rule: impl Fn(Option<PosTag>, PosTag) -> Option<PosTag>) {
    for i in 0..tags.len() {
        let prev = if i > 0 { Some(tags[i - 1]) } else { None };
        if let Some(new_tag) = rule(prev, tags[i]) {
            tags[i] = new_tag;
        }
    }
}
