// Text normalization: tokenization, stopword filtering, POS tagging and lemmatization.

pub mod lemmatizer;
pub mod lexicon;
pub mod model;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod traits;
