// Unit tests for text normalization: tokenizer, stopwords, tagger, lemmatizer.
//
// Everything here runs against the bundled English model. No filesystem
// access except the stopwords file test, which uses a tempfile.

use std::io::Write;
use std::sync::Arc;

use resumatch::pipeline::normalize::{analyze, normalize};
use resumatch::text::lemmatizer::RuleLemmatizer;
use resumatch::text::lexicon::Lexicon;
use resumatch::text::model::LinguisticModel;
use resumatch::text::stopwords::{Language, StopwordSet};
use resumatch::text::tagger::HeuristicTagger;
use resumatch::text::tokenizer::{is_alphabetic_token, Tokenizer};
use resumatch::text::traits::{Lemmatizer, Pos, PosTagger};
use resumatch::{DocumentRole, MatchError};

fn english_lemmatizer() -> RuleLemmatizer {
    RuleLemmatizer::new(Arc::new(Lexicon::english()))
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// Tokenizer
// ============================================================

#[test]
fn tokenizer_drops_numbers_punctuation_and_stopwords() {
    let stopwords = StopwordSet::for_language(Language::English);
    let tokens = Tokenizer::new(&stopwords).tokenize("The Python, and 3.5 of Kubernetes!");
    assert_eq!(tokens, strings(&["python", "kubernetes"]));
}

#[test]
fn tokenizer_keeps_words_carrying_clitics() {
    let stopwords = StopwordSet::for_language(Language::English);
    let tokens = Tokenizer::new(&stopwords)
        .tokenize("Kubernetes's scheduler and Python's typing; don't");
    assert_eq!(tokens, strings(&["kubernetes", "scheduler", "python", "typing"]));
}

#[test]
fn tokenizer_splits_curly_apostrophe_possessive() {
    let stopwords = StopwordSet::for_language(Language::English);
    let tokens = Tokenizer::new(&stopwords).tokenize("The team\u{2019}s Terraform modules");
    assert_eq!(tokens, strings(&["team", "terraform", "modules"]));
}

#[test]
fn tokenizer_is_idempotent_on_normalized_text() {
    let stopwords = StopwordSet::for_language(Language::English);
    let tokenizer = Tokenizer::new(&stopwords);

    let first = tokenizer.tokenize("Rust, Python & Kubernetes; Docker.");
    let second = tokenizer.tokenize(&first.join(" "));
    assert_eq!(first, second, "re-tokenizing normalized text must not change it");
}

#[test]
fn tokenizer_handles_empty_and_symbol_only_text() {
    let stopwords = StopwordSet::for_language(Language::English);
    let tokenizer = Tokenizer::new(&stopwords);
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize("--- 2024 / 10 %").is_empty());
}

#[test]
fn alphabetic_filter_accepts_unicode_letters() {
    assert!(is_alphabetic_token("café"));
    assert!(is_alphabetic_token("straße"));
    assert!(!is_alphabetic_token("c++"));
    assert!(!is_alphabetic_token("x86"));
    assert!(!is_alphabetic_token(""));
}

// ============================================================
// Stopwords
// ============================================================

#[test]
fn stopwords_are_case_folded() {
    let set = StopwordSet::for_language(Language::English);
    assert!(set.contains("the"));
    assert!(set.contains("The"));
    assert!(!set.contains("kubernetes"));
}

#[test]
fn english_stopwords_keep_skill_words() {
    let set = StopwordSet::for_language(Language::English);
    for word in ["test", "research", "system", "information", "work", "c", "r"] {
        assert!(!set.contains(word), "{word} is a content word, not a stopword");
    }
}

#[test]
fn extra_stopwords_file_extends_model() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# company boilerplate").unwrap();
    writeln!(file, "Acme").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "synergy").unwrap();

    let model = LinguisticModel::load(Language::English, Some(file.path())).unwrap();
    assert!(model.stopwords().contains("acme"));
    assert!(model.stopwords().contains("synergy"));
}

#[test]
fn missing_stopwords_file_fails_model_load() {
    let result = LinguisticModel::load(
        Language::English,
        Some(std::path::Path::new("/no/such/stopwords.txt")),
    );
    assert!(result.is_err());
}

// ============================================================
// Tagger
// ============================================================

#[test]
fn tagger_is_one_to_one_with_tokens() {
    let tagger = HeuristicTagger::new(Arc::new(Lexicon::english()));
    let tokens = strings(&["experienced", "engineer", "designing", "scalable", "systems"]);
    let tagged = tagger.tag(&tokens);

    assert_eq!(tagged.len(), tokens.len());
    for (t, token) in tagged.iter().zip(&tokens) {
        assert_eq!(&t.token, token);
    }
}

#[test]
fn tagger_handles_empty_sequence() {
    let tagger = HeuristicTagger::new(Arc::new(Lexicon::english()));
    assert!(tagger.tag(&[]).is_empty());
}

// ============================================================
// Lemmatizer
// ============================================================

#[test]
fn lemmatizer_depends_on_part_of_speech() {
    let lemmatizer = english_lemmatizer();
    assert_eq!(
        lemmatizer.lemmatize("testing", Pos::Verb).as_deref(),
        Some("test")
    );
    assert_eq!(
        lemmatizer.lemmatize("skills", Pos::Noun).as_deref(),
        Some("skill")
    );
    assert_eq!(
        lemmatizer.lemmatize("better", Pos::Adjective).as_deref(),
        Some("good")
    );
}

#[test]
fn lemmatizer_keeps_invariant_nouns() {
    let lemmatizer = english_lemmatizer();
    let lemma = lemmatizer
        .lemmatize("kubernetes", Pos::Noun)
        .unwrap_or_else(|| "kubernetes".to_string());
    assert_eq!(lemma, "kubernetes");
}

// ============================================================
// Per-document normalization
// ============================================================

#[test]
fn normalize_keeps_duplicates_in_order() {
    let model = LinguisticModel::english();
    let collection = normalize(&model, "Python python PYTHON", DocumentRole::Resume).unwrap();
    assert_eq!(collection.lemmas, strings(&["python", "python", "python"]));
}

#[test]
fn normalize_of_stopwords_only_is_empty_input() {
    let model = LinguisticModel::english();
    let err = normalize(&model, "the and of to", DocumentRole::JobDescription).unwrap_err();
    assert!(
        matches!(
            err,
            MatchError::EmptyInput {
                document: DocumentRole::JobDescription
            }
        ),
        "expected EmptyInput for the job description, got {err:?}"
    );
}

#[test]
fn analyze_reports_lemmas_for_inflected_forms() {
    let model = LinguisticModel::english();
    let analyzed = analyze(&model, "Python skills");
    let lemmas: Vec<&str> = analyzed.iter().map(|t| t.lemma.as_str()).collect();
    assert_eq!(lemmas, vec!["python", "skill"]);
}

#[test]
fn non_english_model_passes_tokens_through() {
    let model = LinguisticModel::for_language(Language::French);
    let collection = normalize(&model, "Développeurs Python", DocumentRole::Resume).unwrap();
    assert_eq!(collection.lemmas, strings(&["développeurs", "python"]));
}
