//! Natural Language Processing components
//!
//! This module provides word normalization, stemming, stopword filtering and a
//! plain-text tokenizer that produces [`Document`](crate::types::Document)s.

pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

/// Normalize a raw word before stemming or stopword lookup (case folding)
#[inline]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}
