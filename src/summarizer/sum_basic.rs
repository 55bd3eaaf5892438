//! SumBasic sentence ranking
//!
//! Greedy coverage of the document's most frequent words:
//!
//! 1. pick the stem with the highest weight in the [`Distribution`]
//! 2. among remaining sentences containing it, take the one with the highest
//!    average word weight
//! 3. rank that sentence `1 / (step + 1)`, remove it from the pool and square
//!    the weight of every word it contains (once per occurrence)
//!
//! A stem found in no remaining sentence is dropped from the distribution
//! without consuming a step. Scanning the pool adds every stem it meets at
//! weight zero, so sentences made only of stopwords are still ranked once the
//! content words run out. The loop ends when the pool is empty.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::distribution::Distribution;
use super::selector::best_indices;
use crate::errors::{Result, SumBasicError};
use crate::nlp::stemmer::{NullStemmer, SnowballStemmer, Stemmer};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{
    Document, ExhaustionPolicy, Sentence, SentencesCount, StemmerKind, SumBasicConfig,
};

/// Advisory conditions observed during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fewer distinct words than sentences; ranking quality may suffer
    FewerWordsThanSentences { words: usize, sentences: usize },
    /// Sentences without words were never ranked
    EmptySentences { indices: Vec<usize> },
    /// No content word was left for these sentences; their stems were seeded at zero
    DistributionExhausted { remaining: Vec<usize> },
}

/// Outcome of ranking one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SumBasicRun {
    /// Score per sentence index; zero for sentences never extracted
    pub ranks: Vec<f64>,
    /// Sentence indices in extraction order
    pub extraction_order: Vec<usize>,
    /// Stems dropped because no remaining sentence contained them, in drop order
    pub exhausted_words: Vec<String>,
    /// Advisory conditions, in the order they were observed
    pub diagnostics: Vec<Diagnostic>,
}

impl SumBasicRun {
    /// Score of a sentence, zero when unranked or out of range
    pub fn rank(&self, index: usize) -> f64 {
        self.ranks.get(index).copied().unwrap_or(0.0)
    }

    /// Pick the best sentences of `document` by this run's ranks
    ///
    /// Ranks are matched to sentences by position.
    pub fn best_sentences<'d>(
        &self,
        document: &'d Document,
        count: impl Into<SentencesCount>,
    ) -> Vec<&'d Sentence> {
        let sentences = document.sentences();
        let scores: Vec<f64> = (0..sentences.len()).map(|i| self.rank(i)).collect();
        best_indices(&scores, count.into().resolve(sentences.len()))
            .into_iter()
            .map(|i| &sentences[i])
            .collect()
    }
}

/// SumBasic extractive summarizer
///
/// ```
/// use rapid_sumbasic::{Document, SumBasicSummarizer};
///
/// let doc = Document::from_word_lists([
///     vec!["the", "cat", "sat"],
///     vec!["the", "dog", "ran"],
///     vec!["the", "cat", "ran"],
/// ]);
/// let mut summarizer = SumBasicSummarizer::new();
/// summarizer.set_stop_words(["the"]);
///
/// let summary = summarizer.summarize(&doc, 2).unwrap();
/// assert_eq!(summary.len(), 2);
/// assert!(summary[0].index < summary[1].index);
/// ```
#[derive(Clone)]
pub struct SumBasicSummarizer {
    stemmer: Arc<dyn Stemmer + Send + Sync>,
    stopwords: StopwordFilter,
    exhaustion: ExhaustionPolicy,
}

impl Default for SumBasicSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SumBasicSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumBasicSummarizer")
            .field("stopwords", &self.stopwords.len())
            .field("exhaustion", &self.exhaustion)
            .finish_non_exhaustive()
    }
}

impl SumBasicSummarizer {
    /// Case-folding stemmer, no stopwords, graceful exhaustion
    pub fn new() -> Self {
        Self {
            stemmer: Arc::new(NullStemmer),
            stopwords: StopwordFilter::empty(),
            exhaustion: ExhaustionPolicy::default(),
        }
    }

    /// Build a summarizer from a validated config
    pub fn from_config(config: &SumBasicConfig) -> Result<Self> {
        config.validate()?;

        let stemmer: Arc<dyn Stemmer + Send + Sync> = match config.stemmer {
            StemmerKind::Null => Arc::new(NullStemmer),
            StemmerKind::Snowball => Arc::new(SnowballStemmer::new(
                config.language.as_deref().unwrap_or("en"),
            )?),
        };

        let mut stopwords = match &config.language {
            Some(language) => StopwordFilter::for_language(language)?,
            None => StopwordFilter::empty(),
        };
        stopwords.add_stopwords(&config.stopwords);

        Ok(Self {
            stemmer,
            stopwords,
            exhaustion: config.exhaustion,
        })
    }

    /// Use a custom stemmer
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + Send + Sync + 'static) -> Self {
        self.stemmer = Arc::new(stemmer);
        self
    }

    /// Use a prepared stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set exhaustion policy
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Replace the stopwords; each word is normalized on assignment
    pub fn set_stop_words<W, S>(&mut self, words: W)
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.set_words(words);
    }

    pub fn stop_words(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalize and stem a raw word
    pub fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem_word(word)
    }

    /// Initial word distribution of a document
    pub fn distribution(&self, document: &Document) -> Distribution {
        Distribution::build(document, self.stemmer.as_ref(), &self.stopwords)
    }

    /// Summarize a document into its best `count` sentences, in document order
    pub fn summarize<'d>(
        &self,
        document: &'d Document,
        count: impl Into<SentencesCount>,
    ) -> Result<Vec<&'d Sentence>> {
        let run = self.rate(document)?;
        Ok(run.best_sentences(document, count))
    }

    /// Summarize many documents in parallel
    pub fn summarize_batch<'d>(
        &self,
        documents: &'d [Document],
        count: impl Into<SentencesCount>,
    ) -> Vec<Result<Vec<&'d Sentence>>> {
        let count = count.into();
        documents
            .par_iter()
            .map(|document| self.summarize(document, count))
            .collect()
    }

    /// Rank every sentence of a document
    #[instrument(skip_all, fields(sentences = document.len()))]
    pub fn rate(&self, document: &Document) -> Result<SumBasicRun> {
        let mut distribution = self.distribution(document);
        self.rate_with_distribution(document, &mut distribution)
    }

    /// Run the greedy selection loop over a prepared distribution
    ///
    /// `distribution` is consumed down to whatever survives the run.
    pub fn rate_with_distribution(
        &self,
        document: &Document,
        distribution: &mut Distribution,
    ) -> Result<SumBasicRun> {
        let sentences = document.sentences();
        let mut diagnostics = Vec::new();

        if distribution.len() < sentences.len() {
            warn!(
                words = distribution.len(),
                sentences = sentences.len(),
                "number of words is lower than number of sentences; SumBasic may not work properly"
            );
            diagnostics.push(Diagnostic::FewerWordsThanSentences {
                words: distribution.len(),
                sentences: sentences.len(),
            });
        }

        let stems: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| s.words.iter().map(|w| self.stemmer.stem_word(w)).collect())
            .collect();

        let (mut pool, empty): (Vec<usize>, Vec<usize>) =
            (0..sentences.len()).partition(|&i| !stems[i].is_empty());
        if !empty.is_empty() {
            debug!(count = empty.len(), "skipping sentences without words");
            diagnostics.push(Diagnostic::EmptySentences { indices: empty });
        }

        let mut ranks = vec![0.0; sentences.len()];
        let mut extraction_order = Vec::with_capacity(pool.len());
        let mut exhausted_words = Vec::new();
        let mut step = 0usize;

        while !pool.is_empty() {
            // Only reachable before the first scan: every scan keeps the stems of
            // pooled sentences in the distribution.
            if distribution.is_empty() {
                match self.exhaustion {
                    ExhaustionPolicy::Strict => {
                        return Err(SumBasicError::DistributionExhausted {
                            remaining: pool.len(),
                        });
                    }
                    ExhaustionPolicy::Graceful => {
                        warn!(
                            remaining = pool.len(),
                            "word distribution exhausted; ranking remaining sentences on zero weights"
                        );
                        for &index in &pool {
                            for stem in &stems[index] {
                                distribution.touch(stem);
                            }
                        }
                        diagnostics.push(Diagnostic::DistributionExhausted {
                            remaining: pool.clone(),
                        });
                    }
                }
            }

            let Some(word) = distribution.max_word().map(str::to_owned) else {
                break;
            };

            let Some(position) = best_sentence(&word, &pool, &stems, distribution) else {
                distribution.remove(&word);
                exhausted_words.push(word);
                continue;
            };

            let index = pool.remove(position);
            ranks[index] = 1.0 / (step + 1) as f64;
            for stem in &stems[index] {
                distribution.square(stem);
            }
            debug!(step, sentence = index, rank = ranks[index], "extracted sentence");

            extraction_order.push(index);
            step += 1;
        }

        Ok(SumBasicRun {
            ranks,
            extraction_order,
            exhausted_words,
            diagnostics,
        })
    }
}

/// Position in `pool` of the candidate with the highest average weight
///
/// Candidates are sentences containing `word`; ties go to the earlier position.
/// Every stem of every pooled sentence is touched, in pool order, so stems
/// missing from `distribution` are added at zero. Every pooled sentence has
/// at least one word.
fn best_sentence(
    word: &str,
    pool: &[usize],
    stems: &[Vec<String>],
    distribution: &mut Distribution,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (position, &index) in pool.iter().enumerate() {
        let sentence = &stems[index];
        let mut weight = 0.0;
        let mut candidate = false;
        for stem in sentence {
            weight += distribution.touch(stem);
            candidate |= stem == word;
        }
        if !candidate {
            continue;
        }

        let average = weight / sentence.len() as f64;

        if best.map_or(true, |(_, best_average)| average > best_average) {
            best = Some((position, average));
        }
    }

    best.map(|(position, _)| position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_dog_document() -> Document {
        Document::from_word_lists([
            vec!["the", "cat", "sat"],
            vec!["the", "dog", "ran"],
            vec!["the", "cat", "ran"],
        ])
    }

    fn summarizer_without(stopwords: &[&str]) -> SumBasicSummarizer {
        let mut summarizer = SumBasicSummarizer::new();
        summarizer.set_stop_words(stopwords);
        summarizer
    }

    fn texts<'a>(sentences: &[&'a Sentence]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_cat_dog_ranking() {
        // cat=0.5 sat=0.25 dog=0.25 ran=0.5
        // step 0: "cat" beats "ran" on first occurrence; "the cat ran" averages 1/3 vs 0.25
        // step 1: every word is at 0.25; "cat" again, only "the cat sat" holds it
        // step 2: "the dog ran" is all that is left
        let summarizer = summarizer_without(&["the"]);
        let run = summarizer.rate(&cat_dog_document()).unwrap();

        assert_eq!(run.extraction_order, vec![2, 0, 1]);
        assert_eq!(run.ranks, vec![0.5, 1.0 / 3.0, 1.0]);
        assert!(run.exhausted_words.is_empty());
        assert!(run.diagnostics.is_empty());

        let doc = cat_dog_document();
        let summary = summarizer.summarize(&doc, 2).unwrap();
        assert_eq!(texts(&summary), vec!["the cat sat", "the cat ran"]);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let summarizer = summarizer_without(&["the"]);
        let doc = cat_dog_document();

        let first = summarizer.summarize(&doc, 2).unwrap();
        for _ in 0..10 {
            assert_eq!(summarizer.summarize(&doc, 2).unwrap(), first);
        }
    }

    #[test]
    fn test_exhausted_word_does_not_consume_a_step() {
        // b=1.5 grows when squared and outranks c=0.5 after its only sentence is gone
        let doc = Document::from_word_lists([vec!["b", "b", "b"], vec!["c"]]);
        let summarizer = SumBasicSummarizer::new();
        let run = summarizer.rate(&doc).unwrap();

        assert_eq!(run.extraction_order, vec![0, 1]);
        assert_eq!(run.ranks, vec![1.0, 0.5]);
        assert_eq!(run.exhausted_words, vec!["b".to_string()]);
    }

    #[test]
    fn test_decay_squares_every_occurrence() {
        let doc = Document::from_word_lists([vec!["x", "x", "y"], vec!["z"]]);
        let summarizer = SumBasicSummarizer::new();
        let mut distribution = summarizer.distribution(&doc);
        let x = distribution.get("x").unwrap();
        let third = distribution.get("z").unwrap();

        summarizer
            .rate_with_distribution(&doc, &mut distribution)
            .unwrap();

        let x_squared = x * x;
        assert_eq!(distribution.get("x"), Some(x_squared * x_squared));
        assert_eq!(distribution.get("y"), Some(third * third));
        assert_eq!(distribution.get("z"), Some(third * third));
    }

    #[test]
    fn test_decay_disfavors_overlap() {
        let stems: Vec<Vec<String>> = vec![
            vec!["a".into(), "c".into()],
            vec!["d".into(), "c".into()],
        ];
        let mut distribution = Distribution::from_weights([("a", 0.3), ("c", 0.3), ("d", 0.3)]);
        assert_eq!(best_sentence("c", &[0, 1], &stems, &mut distribution), Some(0));

        // a sentence holding "a" was just extracted
        distribution.square("a");
        assert_eq!(best_sentence("c", &[0, 1], &stems, &mut distribution), Some(1));
        assert_eq!(best_sentence("a", &[1], &stems, &mut distribution), None);
        assert_eq!(distribution.len(), 3);
    }

    #[test]
    fn test_scan_adds_unknown_stems_at_zero() {
        let stems: Vec<Vec<String>> = vec![
            vec!["the".into(), "cat".into()],
            vec!["a".into()],
            vec!["the".into()],
        ];
        let mut distribution = Distribution::from_weights([("cat", 1.0)]);

        assert_eq!(best_sentence("cat", &[0, 1, 2], &stems, &mut distribution), Some(0));
        assert_eq!(
            distribution.iter().collect::<Vec<_>>(),
            vec![("cat", 1.0), ("the", 0.0), ("a", 0.0)]
        );
    }

    #[test]
    fn test_stopword_only_sentences_are_ranked() {
        // cat=1; the scan adds "the" then "a" at zero
        // step 0: "cat" takes sentence 0, then is dropped as exhausted
        // step 1: "the" (first zero entry) takes sentence 2, then is dropped
        // step 2: "a" takes sentence 1
        let doc = Document::from_word_lists([vec!["the", "cat"], vec!["a"], vec!["the"]]);
        let summarizer = summarizer_without(&["the", "a"]);

        assert_eq!(
            summarizer.distribution(&doc).iter().collect::<Vec<_>>(),
            vec![("cat", 1.0)]
        );

        let run = summarizer.rate(&doc).unwrap();
        assert_eq!(run.ranks, vec![1.0, 1.0 / 3.0, 0.5]);
        assert_eq!(run.extraction_order, vec![0, 2, 1]);
        assert_eq!(run.exhausted_words, vec!["cat".to_string(), "the".to_string()]);

        let summary = summarizer.summarize(&doc, 2).unwrap();
        assert_eq!(
            summary.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }

    #[test]
    fn test_fewer_words_than_sentences_warning() {
        let doc = Document::from_word_lists([vec!["same"], vec!["same"], vec!["same"]]);
        let run = SumBasicSummarizer::new().rate(&doc).unwrap();

        assert_eq!(
            run.diagnostics[0],
            Diagnostic::FewerWordsThanSentences {
                words: 1,
                sentences: 3
            }
        );
        // all three contain "same"; equal averages keep document order
        assert_eq!(run.extraction_order, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_sentences_are_never_candidates() {
        let doc = Document::from_word_lists([vec![], vec!["word"], vec![]]);
        let summarizer = SumBasicSummarizer::new();
        let run = summarizer.rate(&doc).unwrap();

        assert_eq!(run.extraction_order, vec![1]);
        assert_eq!(run.rank(0), 0.0);
        assert!(run
            .diagnostics
            .contains(&Diagnostic::EmptySentences { indices: vec![0, 2] }));

        let summary = summarizer.summarize(&doc, 1).unwrap();
        assert_eq!(summary[0].index, 1);
    }

    #[test]
    fn test_graceful_exhaustion() {
        // the distribution only runs dry when every word is a stopword
        let doc = Document::from_word_lists([vec!["the", "a"], vec!["cat"]]);
        let summarizer = summarizer_without(&["the", "a"]);
        let run = summarizer.rate(&doc).unwrap();

        assert_eq!(run.extraction_order, vec![1, 0]);
        assert_eq!(run.ranks, vec![0.5, 1.0]);
        assert!(!run
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::DistributionExhausted { .. })));

        let doc = Document::from_word_lists([vec!["the"], vec!["a", "the"]]);
        let run = summarizer.rate(&doc).unwrap();

        assert!(run
            .diagnostics
            .contains(&Diagnostic::DistributionExhausted { remaining: vec![0, 1] }));
        assert_eq!(run.extraction_order, vec![0, 1]);
        assert_eq!(run.ranks, vec![1.0, 0.5]);
    }

    #[test]
    fn test_strict_exhaustion() {
        let summarizer = summarizer_without(&["the", "it", "is"])
            .with_exhaustion(ExhaustionPolicy::Strict);

        let doc = Document::from_word_lists([vec!["it", "is"], vec!["the", "cat"]]);
        let run = summarizer.rate(&doc).unwrap();
        assert_eq!(run.ranks, vec![0.5, 1.0]);

        let doc = Document::from_word_lists([vec!["it", "is"], vec!["the"]]);
        assert!(matches!(
            summarizer.rate(&doc),
            Err(SumBasicError::DistributionExhausted { remaining: 2 })
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        let run = SumBasicSummarizer::new().rate(&doc).unwrap();

        assert!(run.ranks.is_empty());
        assert!(run.diagnostics.is_empty());
        assert!(SumBasicSummarizer::new().summarize(&doc, 3).unwrap().is_empty());
    }

    #[test]
    fn test_single_sentence_document() {
        let doc = Document::from_word_lists([vec!["only", "one"]]);
        let summarizer = SumBasicSummarizer::new();

        for n in 1..4 {
            let summary = summarizer.summarize(&doc, n).unwrap();
            assert_eq!(texts(&summary), vec!["only one"]);
        }
        assert!(summarizer.summarize(&doc, 0).unwrap().is_empty());
    }

    #[test]
    fn test_stemming_merges_word_forms() {
        let doc = Document::from_word_lists([
            vec!["Cats", "purr"],
            vec!["dogs", "bark"],
            vec!["a", "cat", "naps"],
        ]);
        let summarizer = SumBasicSummarizer::new()
            .with_stemmer(SnowballStemmer::new("en").unwrap())
            .with_stopwords(StopwordFilter::from_words(["a"]));

        let distribution = summarizer.distribution(&doc);
        assert_eq!(distribution.get("cat"), Some(2.0 / 5.0));

        let run = summarizer.rate(&doc).unwrap();
        assert_eq!(run.extraction_order[0], 0);
    }

    #[test]
    fn test_from_config() {
        let config = SumBasicConfig::new()
            .with_language("en")
            .with_stopwords(["Cat"])
            .with_stemmer(StemmerKind::Snowball);
        let summarizer = SumBasicSummarizer::from_config(&config).unwrap();

        assert!(summarizer.stop_words().is_stopword("the"));
        assert!(summarizer.stop_words().is_stopword("cat"));
        assert_eq!(summarizer.stem_word("Running"), "run");

        let bad = SumBasicConfig::new().with_language("xx");
        assert!(SumBasicSummarizer::from_config(&bad).is_err());
    }

    #[test]
    fn test_percentage_count() {
        let doc = cat_dog_document();
        let summarizer = summarizer_without(&["the"]);

        let summary = summarizer.summarize(&doc, SentencesCount::Percentage(34)).unwrap();
        assert_eq!(texts(&summary), vec!["the cat ran"]);
    }

    #[test]
    fn test_summarize_batch_matches_sequential() {
        let docs = vec![
            cat_dog_document(),
            Document::from_word_lists([vec!["x", "y"], vec!["y", "z"], vec!["z"]]),
            Document::default(),
        ];
        let summarizer = summarizer_without(&["the"]);

        let batch = summarizer.summarize_batch(&docs, 2);
        assert_eq!(batch.len(), docs.len());
        for (doc, result) in docs.iter().zip(batch) {
            assert_eq!(result.unwrap(), summarizer.summarize(doc, 2).unwrap());
        }
    }

    #[test]
    fn test_best_sentences_follow_position() {
        let json = r#"{"sentences":[
            {"text":"b","words":["zz"],"index":1},
            {"text":"a","words":["x","x","y"],"index":0}
        ]}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let run = SumBasicSummarizer::new().rate(&doc).unwrap();

        assert_eq!(run.ranks, vec![0.5, 1.0]);
        assert_eq!(texts(&run.best_sentences(&doc, 1)), vec!["a"]);
    }

    #[test]
    fn test_run_serializes() {
        let run = summarizer_without(&["the"]).rate(&cat_dog_document()).unwrap();
        let json = serde_json::to_value(&run).unwrap();

        assert_eq!(json["extraction_order"], serde_json::json!([2, 0, 1]));
    }
}
