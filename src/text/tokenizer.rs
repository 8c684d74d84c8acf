// Tokenizer: case folding, word segmentation and token filtering.
//
// Segmentation follows Unicode word boundaries (UAX #29), so punctuation and
// numerals come out as their own segments. Two Treebank conventions are
// layered on top:
//   - clitics are split off their word: "python's" -> "python" "'s",
//     "don't" -> "do" "n't" (straight or curly apostrophe),
//   - hyphenated compounds written without spaces stay a single token.

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordSet;

/// Case-fold `text` and split it into word-level tokens.
///
/// Every non-whitespace segment becomes a token, including punctuation.
/// Filtering happens separately in [`Tokenizer::tokenize`].
pub fn split_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut words: Vec<String> = Vec::new();

    // `after_word` is true when the previous segment was a word-like segment
    // directly adjacent to the current one. `joining` is true right after a
    // hyphen that was glued onto such a word.
    let mut after_word = false;
    let mut joining = false;

    for segment in lowered.split_word_bounds() {
        if segment.chars().any(char::is_alphanumeric) {
            let (word, clitic) = split_clitic(segment);
            match words.last_mut() {
                Some(last) if joining => last.push_str(word),
                _ => words.push(word.to_string()),
            }
            after_word = clitic.is_none();
            joining = false;
            words.extend(clitic);
        } else if segment == "-" && after_word {
            if let Some(last) = words.last_mut() {
                last.push('-');
            }
            after_word = false;
            joining = true;
        } else {
            after_word = false;
            joining = false;
            if !segment.trim().is_empty() {
                words.push(segment.to_string());
            }
        }
    }

    words
}

/// Clitics detached from the end of a word, after the apostrophe.
const CLITICS: &[&str] = &["s", "ll", "re", "ve", "d", "m"];

/// Split a trailing clitic off a word segment.
///
/// `"team's"` gives `("team", Some("'s"))`, `"can't"` gives
/// `("ca", Some("n't"))`. Segments with an apostrophe elsewhere
/// (`"o'neill"`) are returned whole.
fn split_clitic(segment: &str) -> (&str, Option<String>) {
    let Some(pos) = segment.rfind(|c: char| c == '\'' || c == '\u{2019}') else {
        return (segment, None);
    };
    let head = &segment[..pos];
    let tail = segment[pos..].chars().skip(1).collect::<String>();

    if tail == "t" {
        if let Some(stem) = head.strip_suffix('n').filter(|s| !s.is_empty()) {
            return (stem, Some("n't".to_string()));
        }
    }
    if !head.is_empty() && CLITICS.contains(&tail.as_str()) {
        return (head, Some(format!("'{tail}")));
    }
    (segment, None)
}

/// True when the token is non-empty and made only of alphabetic characters.
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Turns raw document text into the filtered token sequence.
pub struct Tokenizer<'a> {
    stopwords: &'a StopwordSet,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Case-fold, segment, then keep alphabetic tokens that are not stopwords.
    ///
    /// Empty input yields an empty sequence. There is no minimum length.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
            .into_iter()
            .filter(|token| is_alphabetic_token(token))
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_separates_punctuation() {
        let words = split_words("Rust, Go; and SQL.");
        assert_eq!(words, vec!["rust", ",", "go", ";", "and", "sql", "."]);
    }

    #[test]
    fn test_split_keeps_hyphenated_compound() {
        let words = split_words("front-end work");
        assert_eq!(words, vec!["front-end", "work"]);
    }

    #[test]
    fn test_split_detaches_possessives() {
        let words = split_words("Python's typing, the team\u{2019}s Kubernetes's");
        assert_eq!(
            words,
            vec!["python", "'s", "typing", ",", "the", "team", "'s", "kubernetes", "'s"]
        );
    }

    #[test]
    fn test_split_detaches_negation() {
        assert_eq!(split_words("don't"), vec!["do", "n't"]);
        assert_eq!(split_words("can\u{2019}t"), vec!["ca", "n't"]);
        assert_eq!(split_words("we'll we've I'm"), vec!["we", "'ll", "we", "'ve", "i", "'m"]);
    }

    #[test]
    fn test_split_keeps_inner_apostrophe_names() {
        assert_eq!(split_words("o'neill"), vec!["o'neill"]);
    }

    #[test]
    fn test_split_clitic_after_compound() {
        assert_eq!(split_words("front-end's"), vec!["front-end", "'s"]);
    }

    #[test]
    fn test_tokenize_keeps_base_of_contraction() {
        let stopwords = StopwordSet::from_words(["do", "the"]);
        let tokens = Tokenizer::new(&stopwords).tokenize("Google's team doesn't");
        assert_eq!(tokens, vec!["google", "team", "does"]);
    }

    #[test]
    fn test_split_numerals_are_single_tokens() {
        let words = split_words("5 years, v3.5");
        assert!(words.contains(&"5".to_string()));
        assert!(words.iter().all(|w| w != "v3" && w != "3"));
    }

    #[test]
    fn test_alphabetic_filter() {
        assert!(is_alphabetic_token("rust"));
        assert!(is_alphabetic_token("café"));
        assert!(!is_alphabetic_token("python3"));
        assert!(!is_alphabetic_token("don't"));
        assert!(!is_alphabetic_token(""));
    }
}
