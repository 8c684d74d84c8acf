// Exact and fuzzy matching between two lemma collections.
//
// Reference is the resume, Target is the job description. Exact matching is
// a membership test against the deduplicated Reference. Fuzzy matching asks,
// for each distinct Target lemma, whether ANY distinct Reference lemma scores
// strictly above the threshold; the first hit ends the search for that lemma.
//
// Fuzzy matching costs O(|Target| x |Reference|) metric evaluations and is
// the dominant cost of a comparison. Two shortcuts keep the semantics intact:
//   - a Target lemma present in Reference is matched immediately (identical
//     strings score the maximum),
//   - pairs whose length-only upper bound can't beat the threshold are skipped.
// An optional time budget bounds the whole loop.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::similarity::StringSimilarity;
use crate::error::MatchError;

/// A pair must score strictly above this to count as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 80.0;

/// How many metric evaluations run between budget checks.
const BUDGET_CHECK_INTERVAL: u64 = 1024;

/// Result of comparing Reference against Target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSets {
    /// Target lemmas present in Reference
    pub matched: BTreeSet<String>,
    /// Target lemmas absent from Reference
    pub missing: BTreeSet<String>,
    /// Target lemmas with at least one Reference lemma above the threshold
    pub fuzzy_matched: BTreeSet<String>,
}

/// Exact membership split of `target` against the deduplicated `reference`.
///
/// Returns `(matched, missing)`.
pub fn exact_match(
    reference: &[String],
    target: &[String],
) -> (BTreeSet<String>, BTreeSet<String>) {
    let reference: BTreeSet<&str> = reference.iter().map(String::as_str).collect();

    let mut matched = BTreeSet::new();
    let mut missing = BTreeSet::new();
    for lemma in target {
        if reference.contains(lemma.as_str()) {
            matched.insert(lemma.clone());
        } else {
            missing.insert(lemma.clone());
        }
    }
    (matched, missing)
}

pub struct Matcher<'a> {
    similarity: &'a dyn StringSimilarity,
    budget: Option<Duration>,
}

impl<'a> Matcher<'a> {
    pub fn new(similarity: &'a dyn StringSimilarity) -> Self {
        Self {
            similarity,
            budget: None,
        }
    }

    /// Abort fuzzy matching once it has run longer than `budget`.
    ///
    /// The clock is read between metric evaluations (every 1024, and once
    /// at the end), never inside one. A single comparison of two very long
    /// tokens runs to completion and the overrun is reported afterwards.
    pub fn with_budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }

    /// Distinct Target lemmas that fuzzy-match some Reference lemma.
    ///
    /// Fails with `FuzzyBudgetExceeded` when a budget is set and elapsed
    /// time passes it at one of the checkpoints described on `with_budget`.
    pub fn fuzzy_match(
        &self,
        reference: &[String],
        target: &[String],
    ) -> Result<BTreeSet<String>, MatchError> {
        let reference_set: BTreeSet<&str> = reference.iter().map(String::as_str).collect();
        let references: Vec<(&str, usize)> = reference_set
            .iter()
            .map(|r| (*r, r.chars().count()))
            .collect();
        let targets: BTreeSet<&str> = target.iter().map(String::as_str).collect();

        let started = Instant::now();
        let mut compared: u64 = 0;
        let mut skipped: u64 = 0;
        let mut fuzzy = BTreeSet::new();

        for lemma in targets.iter().copied() {
            if reference_set.contains(lemma) {
                fuzzy.insert(lemma.to_string());
                continue;
            }

            let len = lemma.chars().count();
            for &(candidate, candidate_len) in &references {
                if let Some(bound) = self.similarity.upper_bound(len, candidate_len) {
                    if bound <= FUZZY_THRESHOLD {
                        skipped += 1;
                        continue;
                    }
                }

                compared += 1;
                if compared % BUDGET_CHECK_INTERVAL == 0 {
                    self.check_budget(started, compared)?;
                }

                if self.similarity.similarity(lemma, candidate) > FUZZY_THRESHOLD {
                    debug!(job_lemma = lemma, resume_lemma = candidate, "Fuzzy match");
                    fuzzy.insert(lemma.to_string());
                    break;
                }
            }
        }

        self.check_budget(started, compared)?;

        info!(
            metric = self.similarity.name(),
            targets = targets.len(),
            references = references.len(),
            compared,
            skipped,
            fuzzy_matched = fuzzy.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fuzzy matching complete"
        );

        Ok(fuzzy)
    }

    /// Exact and fuzzy sets in one pass over the inputs.
    pub fn match_sets(
        &self,
        reference: &[String],
        target: &[String],
    ) -> Result<MatchSets, MatchError> {
        let (matched, missing) = exact_match(reference, target);
        let fuzzy_matched = self.fuzzy_match(reference, target)?;
        Ok(MatchSets {
            matched,
            missing,
            fuzzy_matched,
        })
    }

    fn check_budget(&self, started: Instant, compared: u64) -> Result<(), MatchError> {
        match self.budget {
            Some(budget) if started.elapsed() > budget => Err(MatchError::FuzzyBudgetExceeded {
                compared,
                elapsed_ms: started.elapsed().as_millis(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::similarity::IndelRatio;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_match_dedups() {
        let (matched, missing) = exact_match(
            &lemmas(&["rust", "go"]),
            &lemmas(&["rust", "rust", "java"]),
        );
        assert_eq!(matched.len(), 1);
        assert!(missing.contains("java"));
    }

    #[test]
    fn test_fuzzy_matches_near_spelling() {
        let matcher = Matcher::new(&IndelRatio);
        let fuzzy = matcher
            .fuzzy_match(&lemmas(&["kubernetes"]), &lemmas(&["kubernete", "java"]))
            .unwrap();
        assert!(fuzzy.contains("kubernete"));
        assert!(!fuzzy.contains("java"));
    }

    #[test]
    fn test_overrun_inside_one_comparison_reported_after_it() {
        // One pair, far below the periodic checkpoint interval.
        let long_a = "ab".repeat(1500);
        let long_b = "ba".repeat(1500);
        let matcher = Matcher::new(&IndelRatio).with_budget(Some(Duration::from_nanos(1)));
        let result = matcher.fuzzy_match(&[long_a], &[long_b]);
        assert!(matches!(
            result,
            Err(MatchError::FuzzyBudgetExceeded { compared: 1, .. })
        ));
    }

    #[test]
    fn test_zero_budget_aborts() {
        let matcher = Matcher::new(&IndelRatio).with_budget(Some(Duration::ZERO));
        let reference: Vec<String> = (0..100).map(|i| format!("ref{i}word")).collect();
        let target: Vec<String> = (0..100).map(|i| format!("tgt{i}word")).collect();
        let result = matcher.fuzzy_match(&reference, &target);
        assert!(matches!(
            result,
            Err(MatchError::FuzzyBudgetExceeded { .. })
        ));
    }
}
