// String similarity metrics on a 0-100 scale.
//
// The default is the Indel ratio: 200 * LCS(a, b) / (|a| + |b|), i.e. the
// share of characters that survive when the two strings are aligned by
// insertions and deletions only. Normalized Levenshtein and Jaro-Winkler
// (from strsim) are available as alternatives.
//
// All metrics score identical strings at 100.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

/// Highest possible similarity.
pub const MAX_SIMILARITY: f64 = 100.0;

/// A normalized similarity measure between two strings.
pub trait StringSimilarity: Send + Sync {
    /// Similarity of `a` and `b` from 0.0 (nothing shared) to 100.0 (identical).
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// An upper bound on `similarity` knowing only the two char lengths.
    ///
    /// Lets the matcher skip pairs that cannot reach the threshold. `None`
    /// means no cheap bound exists and every pair must be compared.
    fn upper_bound(&self, _len_a: usize, _len_b: usize) -> Option<f64> {
        None
    }

    fn name(&self) -> &'static str;
}

/// Insertion/deletion ratio over chars, backed by the longest common subsequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl StringSimilarity for IndelRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return MAX_SIMILARITY;
        }
        200.0 * lcs_len(&a, &b) as f64 / total as f64
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> Option<f64> {
        let total = len_a + len_b;
        if total == 0 {
            return Some(MAX_SIMILARITY);
        }
        Some(200.0 * len_a.min(len_b) as f64 / total as f64)
    }

    fn name(&self) -> &'static str {
        "indel"
    }
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `100 * (1 - levenshtein / max_len)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl StringSimilarity for LevenshteinRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * MAX_SIMILARITY
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> Option<f64> {
        let longest = len_a.max(len_b);
        if longest == 0 {
            return Some(MAX_SIMILARITY);
        }
        // The edit distance is at least the length difference.
        Some(MAX_SIMILARITY * len_a.min(len_b) as f64 / longest as f64)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// `100 * jaro_winkler`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerRatio;

impl StringSimilarity for JaroWinklerRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return MAX_SIMILARITY;
        }
        strsim::jaro_winkler(a, b) * MAX_SIMILARITY
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

/// Selectable similarity metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    #[default]
    Indel,
    Levenshtein,
    JaroWinkler,
}

impl SimilarityMetric {
    pub fn build(self) -> Box<dyn StringSimilarity> {
        match self {
            SimilarityMetric::Indel => Box::new(IndelRatio),
            SimilarityMetric::Levenshtein => Box::new(LevenshteinRatio),
            SimilarityMetric::JaroWinkler => Box::new(JaroWinklerRatio),
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimilarityMetric::Indel => "indel",
            SimilarityMetric::Levenshtein => "levenshtein",
            SimilarityMetric::JaroWinkler => "jaro-winkler",
        };
        f.write_str(name)
    }
}

impl FromStr for SimilarityMetric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "indel" | "ratio" => Ok(SimilarityMetric::Indel),
            "levenshtein" => Ok(SimilarityMetric::Levenshtein),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Ok(SimilarityMetric::JaroWinkler),
            other => anyhow::bail!("Unknown similarity metric '{other}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs() {
        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "ace".chars().collect();
        assert_eq!(lcs_len(&a, &b), 3);
        assert_eq!(lcs_len(&a, &[]), 0);
    }

    #[test]
    fn test_indel_identical_and_disjoint() {
        assert_eq!(IndelRatio.similarity("python", "python"), 100.0);
        assert_eq!(IndelRatio.similarity("abc", "xyz"), 0.0);
        assert_eq!(IndelRatio.similarity("", ""), 100.0);
    }

    #[test]
    fn test_indel_exact_eighty() {
        // LCS 4 over 10 chars
        assert_eq!(IndelRatio.similarity("abcde", "abcdf"), 80.0);
    }

    #[test]
    fn test_indel_bound_holds() {
        let pairs = [("test", "testing"), ("java", "javascript"), ("go", "golang")];
        for (a, b) in pairs {
            let bound = IndelRatio
                .upper_bound(a.chars().count(), b.chars().count())
                .unwrap();
            assert!(IndelRatio.similarity(a, b) <= bound, "{a} vs {b}");
        }
    }

    #[test]
    fn test_levenshtein_ratio() {
        assert_eq!(LevenshteinRatio.similarity("rust", "rust"), 100.0);
        assert!((LevenshteinRatio.similarity("kitten", "sitting") - 57.142857).abs() < 0.001);
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!(
            "jaro-winkler".parse::<SimilarityMetric>().unwrap(),
            SimilarityMetric::JaroWinkler
        );
        assert!("cosine".parse::<SimilarityMetric>().is_err());
    }
}
