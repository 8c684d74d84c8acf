// Tagger and lemmatizer traits: the swap-ready linguistic seams.
//
// The default implementations are an embedded heuristic tagger and a
// rule-based English lemmatizer. Either can be replaced by a model-backed
// implementation without touching the pipeline.

use serde::Serialize;

/// Grammatical category used to pick a lemmatization rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pos {
    Adjective,
    Verb,
    #[default]
    Noun,
    Adverb,
}

impl Pos {
    /// Short label used in diagnostic output.
    pub fn label(self) -> &'static str {
        match self {
            Pos::Adjective => "ADJ",
            Pos::Verb => "VERB",
            Pos::Noun => "NOUN",
            Pos::Adverb => "ADV",
        }
    }
}

/// A token paired with its grammatical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub token: String,
    pub pos: Pos,
}

/// Assigns a part of speech to every token of a filtered sequence.
///
/// Implementations see the whole sequence at once so neighbouring tokens can
/// inform the choice. The output is 1:1 with the input, in the same order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Reduces a token to its dictionary base form for a given category.
pub trait Lemmatizer: Send + Sync {
    /// Returns `None` when no lemma is recognised; callers keep the token as-is.
    fn lemmatize(&self, token: &str, pos: Pos) -> Option<String>;
}
