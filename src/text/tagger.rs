// Heuristic part-of-speech tagger.
//
// Two passes over the filtered token sequence:
//   1. Lexical: each token gets candidate categories from the lexicon, from an
//      inflection of a lexicon word, or from suffix rules (noun by default).
//   2. Contextual: tokens with more than one candidate are resolved left to
//      right using the already-resolved previous tag and the next token's
//      unambiguous tag.
//
// The tagger runs after stopword removal, so the only context available is
// the surrounding content words. That is enough to separate "senior engineer"
// (adjective + noun) from "team leads engineers" (noun + verb + noun).

use std::sync::Arc;

use tracing::debug;

use super::lexicon::Lexicon;
use super::traits::{Pos, PosTagger, TaggedToken};

/// Suffix-driven tagger backed by the embedded lexicon.
pub struct HeuristicTagger {
    lexicon: Arc<Lexicon>,
}

impl HeuristicTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Candidate categories for a token in isolation, most likely first.
    fn lexical_candidates(&self, word: &str) -> Vec<Pos> {
        if let Some(tags) = self.lexicon.tags(word) {
            return tags.to_vec();
        }

        if self.lexicon.exception(word, Pos::Verb).is_some() {
            return vec![Pos::Verb];
        }
        if self.lexicon.exception(word, Pos::Noun).is_some() {
            return vec![Pos::Noun];
        }
        if self.lexicon.exception(word, Pos::Adjective).is_some() {
            return vec![Pos::Adjective, Pos::Adverb];
        }

        if let Some(tags) = self.inflected_candidates(word) {
            return tags;
        }

        vec![suffix_guess(word)]
    }

    /// A `-s`/`-es` form of a lexicon word is either a plural noun or a
    /// third-person verb, depending on what the base word can be.
    fn inflected_candidates(&self, word: &str) -> Option<Vec<Pos>> {
        if !word.ends_with('s') || word.ends_with("ss") || self.lexicon.is_invariant_noun(word) {
            return None;
        }

        let base_tags = [word.strip_suffix("es"), word.strip_suffix('s')]
            .into_iter()
            .flatten()
            .find_map(|base| self.lexicon.tags(base))?;

        let tags: Vec<Pos> = base_tags
            .iter()
            .copied()
            .filter(|p| matches!(p, Pos::Noun | Pos::Verb))
            .collect();

        if tags.is_empty() {
            Some(vec![Pos::Noun])
        } else {
            Some(tags)
        }
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let lexical: Vec<Vec<Pos>> = tokens
            .iter()
            .map(|t| self.lexical_candidates(t))
            .collect();

        let mut tags: Vec<Pos> = Vec::with_capacity(tokens.len());
        let mut ambiguous = 0usize;

        for (i, candidates) in lexical.iter().enumerate() {
            let pos = match candidates.as_slice() {
                [] => Pos::default(),
                [only] => *only,
                _ => {
                    ambiguous += 1;
                    let prev = tags.last().copied();
                    let next = lexical.get(i + 1).and_then(|c| match c.as_slice() {
                        [only] => Some(*only),
                        _ => None,
                    });
                    resolve(candidates, prev, next)
                }
            };
            tags.push(pos);
        }

        debug!(tokens = tokens.len(), ambiguous, "Tagged token sequence");

        tokens
            .iter()
            .zip(tags)
            .map(|(token, pos)| TaggedToken {
                token: token.clone(),
                pos,
            })
            .collect()
    }
}

/// Pick one category for an ambiguous token from its neighbours.
fn resolve(candidates: &[Pos], prev: Option<Pos>, next: Option<Pos>) -> Pos {
    let has = |p: Pos| candidates.contains(&p);

    if prev == Some(Pos::Adverb) && has(Pos::Verb) {
        return Pos::Verb;
    }
    if prev == Some(Pos::Noun) && next == Some(Pos::Noun) && has(Pos::Verb) {
        return Pos::Verb;
    }
    if next == Some(Pos::Noun) && has(Pos::Adjective) {
        return Pos::Adjective;
    }
    if prev == Some(Pos::Adjective) && has(Pos::Noun) {
        return Pos::Noun;
    }

    candidates.first().copied().unwrap_or_default()
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ial", "ual", "less", "ish",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Category guess from the word's ending alone.
fn suffix_guess(word: &str) -> Pos {
    let len = word.chars().count();

    if len > 4 && word.ends_with("ly") {
        return Pos::Adverb;
    }
    if len >= 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            if has_vowel(stem) {
                return Pos::Verb;
            }
        }
    }
    if len >= 6 && word.ends_with("eed") {
        return Pos::Verb;
    }
    if len >= 5 && !word.ends_with("eed") {
        if let Some(stem) = word.strip_suffix("ed") {
            if has_vowel(stem) {
                return Pos::Verb;
            }
        }
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| word.ends_with(s) && len > s.len() + 2)
    {
        return Pos::Adjective;
    }
    if len > 5 && VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return Pos::Verb;
    }

    Pos::Noun
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}
