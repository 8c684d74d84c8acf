// LinguisticModel: the immutable bundle shared by every document pipeline.
//
// Built once at startup and passed around behind an Arc. Nothing in it is
// mutated after construction, so the resume and job description pipelines
// can read it from separate threads without locking.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::lemmatizer::{PassthroughLemmatizer, RuleLemmatizer};
use super::lexicon::Lexicon;
use super::stopwords::{Language, StopwordSet};
use super::tagger::HeuristicTagger;
use super::traits::{Lemmatizer, PosTagger};

pub struct LinguisticModel {
    language: Language,
    stopwords: StopwordSet,
    tagger: Box<dyn PosTagger>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl LinguisticModel {
    /// Assemble a model from explicit parts.
    pub fn new(
        language: Language,
        stopwords: StopwordSet,
        tagger: Box<dyn PosTagger>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            language,
            stopwords,
            tagger,
            lemmatizer,
        }
    }

    /// Bundled English stopwords, heuristic tagger and rule lemmatizer.
    pub fn english() -> Self {
        Self::for_language(Language::English)
    }

    /// The bundled model for `language`.
    ///
    /// Only English has lemmatization rules; other languages keep each
    /// token as its own lemma.
    pub fn for_language(language: Language) -> Self {
        let lexicon = Arc::new(Lexicon::english());
        let lemmatizer: Box<dyn Lemmatizer> = match language {
            Language::English => Box::new(RuleLemmatizer::new(Arc::clone(&lexicon))),
            _ => Box::new(PassthroughLemmatizer),
        };

        Self {
            language,
            stopwords: StopwordSet::for_language(language),
            tagger: Box::new(HeuristicTagger::new(lexicon)),
            lemmatizer,
        }
    }

    /// Load the model for `language`, merging an optional extra stopwords file.
    ///
    /// Fails if the extra file can't be read. Call this once at startup.
    pub fn load(language: Language, extra_stopwords: Option<&Path>) -> Result<Self> {
        let mut model = Self::for_language(language);

        if let Some(path) = extra_stopwords {
            let added = model.stopwords.extend_from_file(path)?;
            info!(path = %path.display(), added, "Loaded extra stopwords");
        }

        info!(
            language = %model.language,
            stopwords = model.stopwords.len(),
            "Linguistic model ready"
        );
        Ok(model)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn tagger(&self) -> &dyn PosTagger {
        self.tagger.as_ref()
    }

    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }
}

impl Default for LinguisticModel {
    fn default() -> Self {
        Self::english()
    }
}
