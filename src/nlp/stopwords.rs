//! Stopword filtering
//!
//! Stopwords are stored normalized: every word passes through
//! [`normalize_word`](super::normalize_word) when it is added, and lookups
//! normalize the probe word the same way. Built-in lists come from the
//! `stop-words` crate.

use super::normalize_word;
use crate::errors::{Result, SumBasicError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A normalized set of stopwords
///
/// The default filter is empty, so no word is filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the built-in list for a language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu,
    /// tr, pl, ar, zh, ja
    pub fn for_language(language: &str) -> Result<Self> {
        let stopwords = Self::load_stopwords(language).ok_or_else(|| {
            SumBasicError::invalid_config(format!("unsupported stopword language {language:?}"))
        })?;
        Ok(Self { stopwords })
    }

    /// Create a stopword filter from a custom list
    pub fn from_words<W, S>(words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.set_words(words);
        filter
    }

    /// Whether a built-in list exists for `language`
    pub fn supports_language(language: &str) -> bool {
        Self::builtin_language(language).is_some()
            || matches!(Self::canonical(language).as_str(), "zh" | "chinese" | "ja" | "japanese")
    }

    /// Replace the whole set, normalizing and deduplicating each word
    pub fn set_words<W, S>(&mut self, words: W)
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect();
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<W, S>(&mut self, words: W)
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| normalize_word(w.as_ref())));
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<W, S>(&mut self, words: W)
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.remove(&normalize_word(word.as_ref()));
        }
    }

    /// Check if a raw word is a stopword once normalized
    pub fn is_stopword(&self, word: &str) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(&normalize_word(word))
    }

    /// Iterate the normalized stopwords (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.stopwords.iter().map(String::as_str)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn canonical(language: &str) -> String {
        language.trim().to_lowercase()
    }

    fn builtin_language(language: &str) -> Option<LANGUAGE> {
        let lang = match Self::canonical(language).as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }

    fn load_stopwords(language: &str) -> Option<FxHashSet<String>> {
        if let Some(lang) = Self::builtin_language(language) {
            return Some(get(lang).iter().map(|s| normalize_word(&s.to_string())).collect());
        }

        // No CJK lists in the crate
        let words: &[&str] = match Self::canonical(language).as_str() {
            "zh" | "chinese" => &[
                "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
                "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            ],
            "ja" | "japanese" => &[
                "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある",
                "いる", "も", "する", "から", "な", "こと", "として", "い", "や", "など", "ない",
                "この", "ため", "その", "よう", "また", "もの", "という", "まで", "これ",
            ],
            _ => return None,
        };
        Some(words.iter().map(|w| w.to_string()).collect())
    }
}
