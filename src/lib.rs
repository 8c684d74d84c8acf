// Resumatch: resume vs job description compatibility scoring
//
// This is the library root. Each module corresponds to a stage of the
// matching pipeline, plus the glue the CLI needs around it.

pub mod config;
pub mod error;
pub mod extract;
pub mod matching;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;

use std::sync::Arc;

pub use error::{DocumentRole, MatchError};
pub use pipeline::{MatchPipeline, MatchReport};

/// Score a resume against a job description with the bundled English model.
///
/// Builds a fresh model on every call. Callers comparing many documents
/// should build one `MatchPipeline` and reuse it.
pub fn compute_match(resume_text: &str, job_text: &str) -> Result<MatchReport, MatchError> {
    let model = Arc::new(text::model::LinguisticModel::english());
    MatchPipeline::new(model).compute_match(resume_text, job_text)
}
