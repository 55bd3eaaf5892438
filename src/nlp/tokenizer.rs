//! Plain-text tokenization
//!
//! Splits text into sentences and words using Unicode (UAX #29) boundaries.
//! Words keep their original casing; normalization happens later, when the
//! summarizer builds its word distribution.

use crate::types::{Document, Sentence};
use unicode_segmentation::UnicodeSegmentation;

/// Unicode-aware sentence and word segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` into a [`Document`]
    ///
    /// Whitespace-only segments are dropped. Sentences made of punctuation only
    /// are kept with an empty word list.
    pub fn tokenize(&self, text: &str) -> Document {
        let sentences = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(index, sentence)| Sentence::new(sentence, self.words(sentence), index))
            .collect();
        Document::new(sentences)
    }

    /// Split a single sentence into word tokens
    pub fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }
}
