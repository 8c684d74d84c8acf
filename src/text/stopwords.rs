// Stopword sets: loaded once per process and shared read-only.
//
// The base list comes from the `stop-words` crate (NLTK lists) for the
// configured language. An optional plain-text file can extend it (one word per line).

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use stop_words::{get, LANGUAGE};

/// Languages with a bundled stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
}

impl Language {
    fn stop_words_language(self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            "german" | "de" => Ok(Language::German),
            "spanish" | "es" => Ok(Language::Spanish),
            "italian" | "it" => Ok(Language::Italian),
            "portuguese" | "pt" => Ok(Language::Portuguese),
            "dutch" | "nl" => Ok(Language::Dutch),
            other => anyhow::bail!("Unsupported language '{other}'"),
        }
    }
}

/// A fixed, case-folded set of words excluded from analysis.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The bundled list for `language`.
    pub fn for_language(language: Language) -> Self {
        let words: Vec<String> = get(language.stop_words_language());
        Self::from_words(words)
    }

    /// Build a set from arbitrary words. Entries are trimmed and case-folded.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Merge words from a file: one per line, blank lines and `#` comments skipped.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopwords file {}", path.display()))?;

        let before = self.words.len();
        self.words.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );
        Ok(self.words.len() - before)
    }

    /// Case-folded membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let folded = word.to_lowercase();
        folded != word && self.words.contains(&folded)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
