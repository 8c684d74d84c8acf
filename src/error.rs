// Core error types for the matching pipeline.
//
// The library reports failures with a typed enum so callers can tell a bad
// document apart from an undefined score. The binary wraps these in anyhow.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which of the two input documents a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    /// The candidate resume (the Reference side of the match)
    Resume,
    /// The job description (the Target side of the match)
    JobDescription,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Resume => write!(f, "resume"),
            DocumentRole::JobDescription => write!(f, "job description"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    /// The source document could not be read, is encrypted, or has no text layer.
    #[error("Could not extract text from the {document}: {reason}")]
    Extraction {
        document: DocumentRole,
        reason: String,
    },

    /// Normalization left no tokens at all for a document.
    #[error("The {document} has no content words left after normalization")]
    EmptyInput { document: DocumentRole },

    /// The job description has zero distinct lemmas, so the percentage is 0/0.
    #[error("Match score is undefined: the job description has no distinct lemmas")]
    DegenerateScore,

    /// The fuzzy comparison ran past its time budget.
    #[error("Fuzzy matching exceeded its time budget after {compared} comparisons ({elapsed_ms} ms)")]
    FuzzyBudgetExceeded { compared: u64, elapsed_ms: u128 },
}

impl MatchError {
    /// The document this error is attributed to, if any.
    pub fn document(&self) -> Option<DocumentRole> {
        match self {
            MatchError::Extraction { document, .. } | MatchError::EmptyInput { document } => {
                Some(*document)
            }
            MatchError::DegenerateScore | MatchError::FuzzyBudgetExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_failing_document() {
        let err = MatchError::EmptyInput {
            document: DocumentRole::JobDescription,
        };
        assert_eq!(err.document(), Some(DocumentRole::JobDescription));
        assert!(err.to_string().contains("job description"));
    }

    #[test]
    fn test_degenerate_has_no_document() {
        assert_eq!(MatchError::DegenerateScore.document(), None);
    }
}
