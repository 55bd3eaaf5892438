//! # rapid_sumbasic
//!
//! SumBasic extractive summarization.
//!
//! Given a document segmented into sentences and words, SumBasic repeatedly
//! picks the most frequent remaining word, extracts the best sentence that
//! contains it, and squares the weight of every word in that sentence so that
//! covered topics fade from later picks. The summary is the top-N extracted
//! sentences, returned in document order.
//!
//! ```
//! use rapid_sumbasic::{SumBasicSummarizer, Tokenizer};
//!
//! let doc = Tokenizer::new().tokenize(
//!     "The cat sat on the mat. The dog ran in the park. The cat ran after the dog.",
//! );
//! let mut summarizer = SumBasicSummarizer::new();
//! summarizer.set_stop_words(["the", "on", "in", "after"]);
//!
//! let summary = summarizer.summarize(&doc, 1).unwrap();
//! assert_eq!(summary.len(), 1);
//! ```

pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SumBasicError};
pub use types::{Document, ExhaustionPolicy, Sentence, SentencesCount, StemmerKind, SumBasicConfig};

// Re-export main functionality
pub use nlp::{
    normalize_word,
    stemmer::{NullStemmer, SnowballStemmer, Stemmer},
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use summarizer::{
    distribution::Distribution,
    selector::select_best_sentences,
    sum_basic::{Diagnostic, SumBasicRun, SumBasicSummarizer},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
