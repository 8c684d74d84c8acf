// Per-document normalization: raw text -> tokens -> tagged tokens -> lemmas.
//
// One parameterized pipeline serves both documents; only the DocumentRole
// differs between the resume run and the job description run.

use serde::Serialize;
use tracing::info;

use crate::error::{DocumentRole, MatchError};
use crate::text::model::LinguisticModel;
use crate::text::tokenizer::Tokenizer;
use crate::text::traits::Pos;

/// The ordered lemmas of one document, duplicates kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LemmaCollection {
    pub role: DocumentRole,
    pub lemmas: Vec<String>,
}

impl LemmaCollection {
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lemmas
    }
}

/// One token with its tag and lemma, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedLemma {
    pub token: String,
    pub pos: Pos,
    pub lemma: String,
}

/// Run tokenizer, tagger and lemmatizer over `text`.
///
/// Never fails: empty text gives an empty vector.
pub fn analyze(model: &LinguisticModel, text: &str) -> Vec<TaggedLemma> {
    let tokens = Tokenizer::new(model.stopwords()).tokenize(text);
    let tagged = model.tagger().tag(&tokens);
    let lemmatizer = model.lemmatizer();

    tagged
        .into_iter()
        .map(|t| {
            let lemma = lemmatizer
                .lemmatize(&t.token, t.pos)
                .unwrap_or_else(|| t.token.clone());
            TaggedLemma {
                token: t.token,
                pos: t.pos,
                lemma,
            }
        })
        .collect()
}

/// Normalize one document into its Lemma Collection.
///
/// Fails with `EmptyInput` when nothing survives filtering.
pub fn normalize(
    model: &LinguisticModel,
    text: &str,
    role: DocumentRole,
) -> Result<LemmaCollection, MatchError> {
    let analyzed = analyze(model, text);
    if analyzed.is_empty() {
        return Err(MatchError::EmptyInput { document: role });
    }

    let lemmas: Vec<String> = analyzed.into_iter().map(|t| t.lemma).collect();
    info!(
        document = %role,
        chars = text.len(),
        lemmas = lemmas.len(),
        "Normalized document"
    );

    Ok(LemmaCollection { role, lemmas })
}
