//! Word stemming
//!
//! The summarizer keys its word distribution by stem. A [`Stemmer`] receives a
//! word that has already been normalized with [`normalize_word`]; use
//! [`Stemmer::stem_word`] to go straight from a raw token to its stem.

use super::normalize_word;
use crate::errors::{Result, SumBasicError};
use rust_stemmers::Algorithm;

/// Reduces a normalized word to the key used in the word distribution.
///
/// Implementations must be deterministic and pure.
pub trait Stemmer {
    /// Stem an already-normalized word
    fn stem(&self, word: &str) -> String;

    /// Normalize then stem a raw token
    fn stem_word(&self, word: &str) -> String {
        self.stem(&normalize_word(word))
    }
}

/// Identity stemmer: the stem of a word is its normalized form
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStemmer;

impl Stemmer for NullStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Snowball (Porter2 family) stemmer from `rust-stemmers`
pub struct SnowballStemmer {
    language: &'static str,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create a stemmer for a language code or name ("en", "german", ...)
    pub fn new(language: &str) -> Result<Self> {
        let (language, algorithm) = snowball_algorithm(language).ok_or_else(|| {
            SumBasicError::invalid_config(format!("no snowball stemmer for language {language:?}"))
        })?;
        Ok(Self {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }

    /// The canonical language name
    pub fn language(&self) -> &'static str {
        self.language
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Map a language code or name to a snowball algorithm
pub(crate) fn snowball_algorithm(language: &str) -> Option<(&'static str, Algorithm)> {
    let found = match language.trim().to_lowercase().as_str() {
        "ar" | "arabic" => ("arabic", Algorithm::Arabic),
        "da" | "danish" => ("danish", Algorithm::Danish),
        "nl" | "dutch" => ("dutch", Algorithm::Dutch),
        "en" | "english" => ("english", Algorithm::English),
        "fi" | "finnish" => ("finnish", Algorithm::Finnish),
        "fr" | "french" => ("french", Algorithm::French),
        "de" | "german" => ("german", Algorithm::German),
        "el" | "greek" => ("greek", Algorithm::Greek),
        "hu" | "hungarian" => ("hungarian", Algorithm::Hungarian),
        "it" | "italian" => ("italian", Algorithm::Italian),
        "no" | "norwegian" => ("norwegian", Algorithm::Norwegian),
        "pt" | "portuguese" => ("portuguese", Algorithm::Portuguese),
        "ro" | "romanian" => ("romanian", Algorithm::Romanian),
        "ru" | "russian" => ("russian", Algorithm::Russian),
        "es" | "spanish" => ("spanish", Algorithm::Spanish),
        "sv" | "swedish" => ("swedish", Algorithm::Swedish),
        "ta" | "tamil" => ("tamil", Algorithm::Tamil),
        "tr" | "turkish" => ("turkish", Algorithm::Turkish),
        _ => return None,
    };
    Some(found)
}
