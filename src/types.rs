//! Core types for rapid_sumbasic
//!
//! This module defines the document model consumed by the summarizer (documents,
//! sentences, raw words), the requested summary length, and configuration.

use crate::errors::{Result, SumBasicError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
///
/// Identity is the sentence's `index` within its document: two sentences with the
/// same text at different positions are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text
    pub text: String,
    /// Raw (unnormalized) word tokens in order
    pub words: Vec<String>,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new<W, S>(text: impl Into<String>, words: W, index: usize) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            words: words.into_iter().map(Into::into).collect(),
            index,
        }
    }

    /// Create a sentence whose text is its words joined by single spaces
    pub fn from_words<W, S>(words: W, index: usize) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self {
            text: words.join(" "),
            words,
            index,
        }
    }

    /// Number of word tokens
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the sentence has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ============================================================================
// Document
// ============================================================================

/// An ordered sequence of sentences
///
/// Deserializing goes through [`Document::new`], so stored `index` fields are
/// replaced by each sentence's position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    sentences: Vec<Sentence>,
}

#[derive(Deserialize)]
struct RawDocument {
    sentences: Vec<Sentence>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.sentences)
    }
}

impl Document {
    /// Create a document, re-indexing sentences by their position
    pub fn new(sentences: Vec<Sentence>) -> Self {
        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| Sentence { index, ..sentence })
            .collect();
        Self { sentences }
    }

    /// Build a document from pre-tokenized sentences
    ///
    /// ```
    /// use rapid_sumbasic::Document;
    ///
    /// let doc = Document::from_word_lists([vec!["the", "cat", "sat"], vec!["a", "dog"]]);
    /// assert_eq!(doc.len(), 2);
    /// assert_eq!(doc.sentences()[1].text, "a dog");
    /// ```
    pub fn from_word_lists<D, W, S>(sentences: D) -> Self
    where
        D: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(index, words)| Sentence::from_words(words, index))
            .collect();
        Self { sentences }
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Every word of every sentence, in document order
    ///
    /// Each call returns a fresh iterator.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences
            .iter()
            .flat_map(|s| s.words.iter().map(String::as_str))
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Sentences Count
// ============================================================================

/// How many sentences a summary should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentencesCount {
    /// A fixed number of sentences
    Absolute(usize),
    /// A percentage of the document's sentences (at least one when the document is non-empty)
    Percentage(u32),
}

impl Default for SentencesCount {
    fn default() -> Self {
        SentencesCount::Absolute(3)
    }
}

impl From<usize> for SentencesCount {
    fn from(count: usize) -> Self {
        SentencesCount::Absolute(count)
    }
}

/// Negative counts select nothing
impl From<i32> for SentencesCount {
    fn from(count: i32) -> Self {
        SentencesCount::Absolute(usize::try_from(count).unwrap_or(0))
    }
}

impl From<i64> for SentencesCount {
    fn from(count: i64) -> Self {
        SentencesCount::Absolute(usize::try_from(count).unwrap_or(0))
    }
}

impl SentencesCount {
    /// Resolve to a concrete count for a document with `total` sentences
    pub fn resolve(&self, total: usize) -> usize {
        match *self {
            SentencesCount::Absolute(n) => n.min(total),
            SentencesCount::Percentage(p) => {
                let count = total.saturating_mul(p as usize) / 100;
                count.max(1).min(total)
            }
        }
    }
}

impl std::str::FromStr for SentencesCount {
    type Err = SumBasicError;

    /// Parse `"3"`, `"-1"` (clamped to zero) or `"20%"`.
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Some(percentage) = value.strip_suffix('%') {
            return percentage
                .trim()
                .parse::<u32>()
                .map(SentencesCount::Percentage)
                .map_err(|_| SumBasicError::invalid_count(format!("bad percentage {value:?}")));
        }

        value
            .parse::<i64>()
            .map(SentencesCount::from)
            .map_err(|_| {
                SumBasicError::invalid_count(format!(
                    "expected integer or percentage, got {value:?}"
                ))
            })
    }
}

// ============================================================================
// Exhaustion Policy
// ============================================================================

/// What to do when the distribution is empty while sentences remain unranked
///
/// Only a document whose every word is a stopword gets there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Warn, then rank the remaining sentences on zero-weight stems
    #[default]
    Graceful,
    /// Fail with [`SumBasicError::DistributionExhausted`]
    Strict,
}

// ============================================================================
// Stemmer Kind
// ============================================================================

/// Which built-in stemmer a summarizer constructed from config uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    /// Case folding only
    #[default]
    Null,
    /// Snowball stemmer for the configured language
    Snowball,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for SumBasic summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumBasicConfig {
    /// Language code for built-in stopwords and stemming (e.g., "en", "de").
    /// `None` means no built-in stopword list.
    #[serde(default)]
    pub language: Option<String>,
    /// Additional stopwords (normalized on load)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Stemmer used to build distribution keys
    #[serde(default)]
    pub stemmer: StemmerKind,
    /// Behavior when the distribution empties before the sentence pool
    #[serde(default)]
    pub exhaustion: ExhaustionPolicy,
}

impl Default for SumBasicConfig {
    fn default() -> Self {
        Self {
            language: None,
            stopwords: Vec::new(),
            stemmer: StemmerKind::Null,
            exhaustion: ExhaustionPolicy::Graceful,
        }
    }
}

impl SumBasicConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SumBasicConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(language) = &self.language {
            if !crate::nlp::stopwords::StopwordFilter::supports_language(language) {
                return Err(SumBasicError::invalid_config(format!(
                    "unsupported stopword language {language:?}"
                )));
            }
        }

        if self.stemmer == StemmerKind::Snowball {
            let language = self.language.as_deref().unwrap_or("en");
            if crate::nlp::stemmer::snowball_algorithm(language).is_none() {
                return Err(SumBasicError::invalid_config(format!(
                    "no snowball stemmer for language {language:?}"
                )));
            }
        }

        if self.stopwords.iter().any(|w| w.trim().is_empty()) {
            return Err(SumBasicError::invalid_config("stopwords must not be blank"));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder method: set additional stopwords
    pub fn with_stopwords<W, S>(mut self, words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set stemmer
    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Builder method: set exhaustion policy
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }
}
