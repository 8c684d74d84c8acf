use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::matching::similarity::SimilarityMetric;
use crate::text::stopwords::Language;

/// Fuzzy matching budget when RESUMATCH_FUZZY_BUDGET_MS is unset.
pub const DEFAULT_FUZZY_BUDGET_MS: u64 = 30_000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override these values where both exist.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stopword list and lemmatizer language (RESUMATCH_LANGUAGE, default english)
    pub language: Language,
    /// Extra stopwords merged into the bundled list (RESUMATCH_STOPWORDS_FILE)
    pub stopwords_file: Option<PathBuf>,
    /// Fuzzy similarity metric (RESUMATCH_SIMILARITY, default indel)
    pub similarity: SimilarityMetric,
    /// Time budget for fuzzy matching; `None` means unbounded
    pub fuzzy_budget: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default. A value that is set but can't be parsed
    /// is an error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        let language = match env::var("RESUMATCH_LANGUAGE") {
            Ok(raw) => raw
                .parse::<Language>()
                .context("Invalid RESUMATCH_LANGUAGE")?,
            Err(_) => Language::default(),
        };

        let similarity = match env::var("RESUMATCH_SIMILARITY") {
            Ok(raw) => raw
                .parse::<SimilarityMetric>()
                .context("Invalid RESUMATCH_SIMILARITY")?,
            Err(_) => SimilarityMetric::default(),
        };

        let budget_ms = match env::var("RESUMATCH_FUZZY_BUDGET_MS") {
            Ok(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("RESUMATCH_FUZZY_BUDGET_MS must be a whole number of milliseconds, got '{raw}'")
            })?,
            Err(_) => DEFAULT_FUZZY_BUDGET_MS,
        };

        Ok(Self {
            language,
            stopwords_file: env::var("RESUMATCH_STOPWORDS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            similarity,
            fuzzy_budget: budget_from_millis(budget_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            stopwords_file: None,
            similarity: SimilarityMetric::default(),
            fuzzy_budget: budget_from_millis(DEFAULT_FUZZY_BUDGET_MS),
        }
    }
}

/// `0` disables the guard.
pub fn budget_from_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}
