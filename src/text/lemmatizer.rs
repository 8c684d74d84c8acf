// Rule-based lemmatizer in the style of WordNet's morphy.
//
// For each category: look up the irregular-form table first, then apply the
// category's detachment rules to produce candidate stems. A candidate that
// the lexicon knows as a base form wins. Otherwise orthographic heuristics
// pick one: undo consonant doubling ("planned" -> "plan"), restore a silent
// "e" ("managed" -> "manage"), or keep the bare stem ("tested" -> "test").

use std::sync::Arc;

use super::lexicon::Lexicon;
use super::traits::{Lemmatizer, Pos};

/// English lemmatizer over the embedded lexicon.
pub struct RuleLemmatizer {
    lexicon: Arc<Lexicon>,
}

impl RuleLemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn noun(&self, word: &str) -> Option<String> {
        if self.lexicon.is_invariant_noun(word) || self.lexicon.is_base(word, Pos::Noun) {
            return Some(word.to_string());
        }
        if !word.ends_with('s') || ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return None;
        }

        let mut candidates: Vec<String> = Vec::new();
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                candidates.push(format!("{stem}y"));
            }
        }
        if let Some(stem) = word.strip_suffix("zes").filter(|s| s.ends_with("zz")) {
            candidates.push(undouble(stem).to_string());
        }
        for suffix in ["sses", "ches", "shes", "xes"] {
            if word.ends_with(suffix) {
                candidates.push(word[..word.len() - 2].to_string());
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            candidates.push(stem.to_string());
        }

        self.choose(&candidates, Pos::Noun)
            .or_else(|| first_plausible(&candidates))
    }

    fn verb(&self, word: &str) -> Option<String> {
        if self.lexicon.is_base(word, Pos::Verb) {
            return Some(word.to_string());
        }

        let mut candidates: Vec<String> = Vec::new();

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
                candidates.push(format!("{stem}y"));
            }
        }

        if let Some(stem) = word.strip_suffix("eed") {
            // agreed -> agree; bare "-eed" verbs are caught by the base check
            let base = format!("{stem}ee");
            if stem.len() >= 2 {
                candidates.push(base);
            }
        } else if let Some(stem) = word.strip_suffix("ed").filter(|s| s.len() >= 2) {
            if has_vowel(stem) {
                candidates.extend(self.participle_candidates(stem));
            }
        } else if let Some(stem) = word.strip_suffix("ing").filter(|s| s.len() >= 2) {
            if has_vowel(stem) {
                candidates.extend(self.participle_candidates(stem));
            }
        } else if word.ends_with('s') && !word.ends_with("ss") {
            for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
                if word.ends_with(suffix) {
                    candidates.push(word[..word.len() - 2].to_string());
                }
            }
            candidates.push(word[..word.len() - 1].to_string());
        }

        self.choose(&candidates, Pos::Verb)
            .or_else(|| first_plausible(&candidates))
    }

    /// Candidate bases for the stem left after removing "-ed" or "-ing".
    ///
    /// A known base among the spellings is returned alone; otherwise the
    /// orthographic heuristic picks a single spelling.
    fn participle_candidates(&self, stem: &str) -> Vec<String> {
        let with_e = format!("{stem}e");
        let undoubled = undouble(stem);

        for candidate in [with_e.as_str(), stem, undoubled] {
            if self.lexicon.is_base(candidate, Pos::Verb) {
                return vec![candidate.to_string()];
            }
        }

        let chosen = if undoubled.len() < stem.len() && stem.len() >= 4 && !ends_in_any(stem, "lsz")
        {
            undoubled.to_string()
        } else if needs_silent_e(stem) {
            with_e
        } else {
            stem.to_string()
        };
        vec![chosen]
    }

    fn adjective(&self, word: &str) -> Option<String> {
        if self.lexicon.is_base(word, Pos::Adjective) {
            return Some(word.to_string());
        }

        let mut candidates: Vec<String> = Vec::new();
        for (suffix, replacement) in [("iest", "y"), ("ier", "y")] {
            if let Some(stem) = word.strip_suffix(suffix) {
                candidates.push(format!("{stem}{replacement}"));
            }
        }
        for suffix in ["est", "er"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                candidates.push(stem.to_string());
                candidates.push(format!("{stem}e"));
                candidates.push(undouble(stem).to_string());
            }
        }

        // Comparatives only reduce to a known adjective; "senior" stays "senior".
        self.choose(&candidates, Pos::Adjective)
    }

    fn choose(&self, candidates: &[String], pos: Pos) -> Option<String> {
        candidates
            .iter()
            .find(|c| self.lexicon.is_base(c, pos))
            .cloned()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str, pos: Pos) -> Option<String> {
        if let Some(base) = self.lexicon.exception(token, pos) {
            return Some(base.to_string());
        }

        match pos {
            Pos::Noun => self.noun(token),
            Pos::Verb => self.verb(token),
            Pos::Adjective => self.adjective(token),
            Pos::Adverb => None,
        }
    }
}

/// Lemmatizer for languages without rules: every token is its own lemma.
pub struct PassthroughLemmatizer;

impl Lemmatizer for PassthroughLemmatizer {
    fn lemmatize(&self, _token: &str, _pos: Pos) -> Option<String> {
        None
    }
}

fn first_plausible(candidates: &[String]) -> Option<String> {
    candidates.iter().find(|c| c.chars().count() >= 2).cloned()
}

fn is_vowel_at(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        // "y" is a vowel after a consonant ("typ-", "sty-")
        'y' => i > 0 && !is_vowel_at(chars, i - 1),
        _ => false,
    }
}

fn has_vowel(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    (0..chars.len()).any(|i| is_vowel_at(&chars, i))
}

fn ends_in_any(s: &str, set: &str) -> bool {
    s.chars().last().is_some_and(|c| set.contains(c))
}

/// Drop one letter from a doubled final consonant: "plann" -> "plan".
fn undouble(stem: &str) -> &str {
    let mut rev = stem.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) if a == b && !matches!(a, 'a' | 'e' | 'i' | 'o' | 'u') => {
            &stem[..stem.len() - a.len_utf8()]
        }
        _ => stem,
    }
}

/// Whether a stem lost a silent "e" when the suffix was attached.
fn needs_silent_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    let consonant_before = |k: usize| n > k && !is_vowel_at(&chars, n - 1 - k);

    // "us-", "ag-", "ic-": two-letter vowel + consonant stems
    if n == 2 && is_vowel_at(&chars, 0) && !matches!(last, 'x' | 'w') {
        return true;
    }

    // c, g, v, z endings: reduc-, manag-, improv-, optimiz-; but not belong-
    if matches!(last, 'c' | 'v' | 'z') || (last == 'g' && prev != 'n') {
        return true;
    }

    // automat-, execut-, configur-, requir- after a consonant
    if matches!((prev, last), ('a', 't') | ('u', 't') | ('u', 'r') | ('i', 'r')) && consonant_before(2)
    {
        return true;
    }

    // enabl-, handl-
    if last == 'l' && "bcdfgkpstz".contains(prev) {
        return true;
    }

    // licens-, pars-, puls-, collaps-, releas-
    if last == 's' && ("nrlp".contains(prev) || stem.ends_with("eas")) {
        return true;
    }

    // Short consonant-vowel-consonant stems with one vowel group: hop-, bas-, scal-
    if n >= 3
        && !is_vowel_at(&chars, n - 3)
        && is_vowel_at(&chars, n - 2)
        && !is_vowel_at(&chars, n - 1)
        && !matches!(last, 'w' | 'x' | 'y')
        && vowel_groups(&chars) == 1
    {
        return true;
    }

    false
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for i in 0..chars.len() {
        let v = is_vowel_at(chars, i);
        if v && !in_group {
            groups += 1;
        }
        in_group = v;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, pos: Pos) -> String {
        let lemmatizer = RuleLemmatizer::new(Arc::new(Lexicon::english()));
        lemmatizer
            .lemmatize(word, pos)
            .unwrap_or_else(|| word.to_string())
    }

    #[test]
    fn test_undouble() {
        assert_eq!(undouble("plann"), "plan");
        assert_eq!(undouble("test"), "test");
        assert_eq!(undouble("agree"), "agree");
    }

    #[test]
    fn test_silent_e() {
        assert!(needs_silent_e("manag"));
        assert!(needs_silent_e("automat"));
        assert!(needs_silent_e("hop"));
        assert!(needs_silent_e("us"));
        assert!(!needs_silent_e("test"));
        assert!(!needs_silent_e("visit"));
        assert!(!needs_silent_e("belong"));
        assert!(!needs_silent_e("treat"));
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(lemma("testing", Pos::Verb), "test");
        assert_eq!(lemma("managed", Pos::Verb), "manage");
        assert_eq!(lemma("planned", Pos::Verb), "plan");
        assert_eq!(lemma("running", Pos::Verb), "run");
        assert_eq!(lemma("installed", Pos::Verb), "install");
        assert_eq!(lemma("added", Pos::Verb), "add");
        assert_eq!(lemma("hoped", Pos::Verb), "hope");
        assert_eq!(lemma("applies", Pos::Verb), "apply");
        assert_eq!(lemma("fixes", Pos::Verb), "fix");
        assert_eq!(lemma("led", Pos::Verb), "lead");
    }

    #[test]
    fn test_noun_forms() {
        assert_eq!(lemma("skills", Pos::Noun), "skill");
        assert_eq!(lemma("responsibilities", Pos::Noun), "responsibility");
        assert_eq!(lemma("processes", Pos::Noun), "process");
        assert_eq!(lemma("caches", Pos::Noun), "cache");
        assert_eq!(lemma("approaches", Pos::Noun), "approach");
        assert_eq!(lemma("kubernetes", Pos::Noun), "kubernetes");
        assert_eq!(lemma("status", Pos::Noun), "status");
        assert_eq!(lemma("children", Pos::Noun), "child");
    }

    #[test]
    fn test_adjective_forms() {
        assert_eq!(lemma("bigger", Pos::Adjective), "big");
        assert_eq!(lemma("larger", Pos::Adjective), "large");
        assert_eq!(lemma("happiest", Pos::Adjective), "happy");
        assert_eq!(lemma("better", Pos::Adjective), "good");
        assert_eq!(lemma("senior", Pos::Adjective), "senior");
    }

    #[test]
    fn test_adverbs_only_change_through_exceptions() {
        assert_eq!(lemma("quickly", Pos::Adverb), "quickly");
        assert_eq!(lemma("better", Pos::Adverb), "well");
    }

    #[test]
    fn test_passthrough_never_recognises() {
        assert_eq!(PassthroughLemmatizer.lemmatize("running", Pos::Verb), None);
    }
}
