// Match pipeline: normalize both documents, then match and score them.
//
// Data flows one way:
//   text -> tokens -> tagged tokens -> lemmas -> (resume, job) -> match sets -> score
//
// The two document runs share nothing but the read-only LinguisticModel, so
// they execute on separate scoped threads unless the pipeline is sequential.

pub mod normalize;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::error::{DocumentRole, MatchError};
use crate::matching::matcher::Matcher;
use crate::matching::similarity::{IndelRatio, StringSimilarity};
use crate::scoring::score::{compute_match_score, Score};
use crate::text::model::LinguisticModel;

pub use normalize::{LemmaCollection, TaggedLemma};

/// Everything a comparison produces.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Share of distinct job lemmas that fuzzy-match the resume
    pub score: Score,
    /// Job lemmas found verbatim in the resume
    pub matched: BTreeSet<String>,
    /// Job lemmas not found verbatim in the resume
    pub missing: BTreeSet<String>,
    /// Job lemmas with a resume lemma scoring above the fuzzy threshold
    pub fuzzy_matched: BTreeSet<String>,
    pub resume_lemmas: usize,
    pub job_lemmas: usize,
    pub distinct_job_lemmas: usize,
}

pub struct MatchPipeline {
    model: Arc<LinguisticModel>,
    similarity: Arc<dyn StringSimilarity>,
    fuzzy_budget: Option<Duration>,
    parallel: bool,
}

impl MatchPipeline {
    /// Pipeline with the Indel ratio, no time budget, and parallel normalization.
    pub fn new(model: Arc<LinguisticModel>) -> Self {
        Self {
            model,
            similarity: Arc::new(IndelRatio),
            fuzzy_budget: None,
            parallel: true,
        }
    }

    pub fn with_similarity(mut self, similarity: Arc<dyn StringSimilarity>) -> Self {
        self.similarity = similarity;
        self
    }

    /// Bound the fuzzy matching step. `None` leaves it unbounded.
    pub fn with_fuzzy_budget(mut self, budget: Option<Duration>) -> Self {
        self.fuzzy_budget = budget;
        self
    }

    /// Normalize both documents on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn model(&self) -> &LinguisticModel {
        &self.model
    }

    /// Tagged tokens and lemmas of one text, without the emptiness check.
    pub fn analyze(&self, text: &str) -> Vec<TaggedLemma> {
        normalize::analyze(&self.model, text)
    }

    /// Lemma Collection of one document.
    pub fn normalize(&self, text: &str, role: DocumentRole) -> Result<LemmaCollection, MatchError> {
        normalize::normalize(&self.model, text, role)
    }

    /// Compare a resume against a job description.
    pub fn compute_match(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<MatchReport, MatchError> {
        let (resume, job) = if self.parallel {
            std::thread::scope(|scope| {
                let resume =
                    scope.spawn(|| self.normalize(resume_text, DocumentRole::Resume));
                let job = self.normalize(job_text, DocumentRole::JobDescription);
                let resume = resume
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                (resume, job)
            })
        } else {
            (
                self.normalize(resume_text, DocumentRole::Resume),
                self.normalize(job_text, DocumentRole::JobDescription),
            )
        };

        // Resume errors are reported first so failures are deterministic.
        let resume = resume?;
        let job = job?;

        self.compare_lemmas(resume.as_slice(), job.as_slice())
    }

    /// Match and score two already-normalized collections.
    pub fn compare_lemmas(
        &self,
        resume: &[String],
        job: &[String],
    ) -> Result<MatchReport, MatchError> {
        let distinct_job_lemmas = job.iter().collect::<BTreeSet<_>>().len();

        let matcher = Matcher::new(self.similarity.as_ref()).with_budget(self.fuzzy_budget);
        let sets = matcher.match_sets(resume, job)?;
        let score = compute_match_score(&sets, distinct_job_lemmas)?;

        info!(
            score = score.rounded(),
            matched = sets.matched.len(),
            missing = sets.missing.len(),
            fuzzy_matched = sets.fuzzy_matched.len(),
            distinct_job_lemmas,
            "Computed match"
        );

        Ok(MatchReport {
            score,
            matched: sets.matched,
            missing: sets.missing,
            fuzzy_matched: sets.fuzzy_matched,
            resume_lemmas: resume.len(),
            job_lemmas: job.len(),
            distinct_job_lemmas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_job_collection_is_degenerate() {
        let pipeline = MatchPipeline::new(Arc::new(LinguisticModel::english()));
        let result = pipeline.compare_lemmas(&lemmas(&["rust"]), &[]);
        assert!(matches!(result, Err(MatchError::DegenerateScore)));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let model = Arc::new(LinguisticModel::english());
        let resume = "Built distributed services in Rust and Python.";
        let job = "Rust engineer building distributed systems.";

        let parallel = MatchPipeline::new(Arc::clone(&model))
            .compute_match(resume, job)
            .unwrap();
        let sequential = MatchPipeline::new(model)
            .sequential()
            .compute_match(resume, job)
            .unwrap();

        assert_eq!(parallel.score, sequential.score);
        assert_eq!(parallel.matched, sequential.matched);
        assert_eq!(parallel.fuzzy_matched, sequential.fuzzy_matched);
    }

    #[test]
    fn test_resume_error_reported_first() {
        let pipeline = MatchPipeline::new(Arc::new(LinguisticModel::english()));
        let err = pipeline.compute_match("", "").unwrap_err();
        assert_eq!(err.document(), Some(DocumentRole::Resume));
    }
}
