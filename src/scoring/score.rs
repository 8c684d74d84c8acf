// Match percentage.
//
// The published score is the share of distinct job-description lemmas that
// fuzzy-match something in the resume:
//
//   score = |fuzzy_matched| / |distinct job lemmas| * 100
//
// Exact matched/missing sets are reported alongside but don't feed the score.
// An empty denominator is an explicit error, never NaN.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::MatchError;
use crate::matching::matcher::MatchSets;

/// A match percentage in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// `matched / total * 100`. Fails with `DegenerateScore` when `total` is zero.
    pub fn from_counts(matched: usize, total: usize) -> Result<Self, MatchError> {
        if total == 0 {
            return Err(MatchError::DegenerateScore);
        }
        debug_assert!(matched <= total, "{matched} matches out of {total} lemmas");
        Ok(Score(matched as f64 * 100.0 / total as f64))
    }

    /// The unrounded percentage.
    pub fn percent(self) -> f64 {
        self.0
    }

    /// The percentage rounded to two decimal places.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rounded())
    }
}

/// Score the fuzzy set against the number of distinct Target lemmas.
pub fn compute_match_score(sets: &MatchSets, distinct_target: usize) -> Result<Score, MatchError> {
    Score::from_counts(sets.fuzzy_matched.len(), distinct_target)
}
