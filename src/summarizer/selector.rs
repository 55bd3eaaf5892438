//! Top-N sentence selection
//!
//! Picks the highest-rated sentences and returns them in document order, so a
//! summary reads in the same order as its source.

use crate::types::{Sentence, SentencesCount};

/// Indices of the `count` highest scores, in ascending index order
///
/// Ties keep the earlier index. `scores` is indexed by sentence position.
pub fn best_indices(scores: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort: equal scores stay in document order
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(count);
    order.sort_unstable();
    order
}

/// Select the best sentences by `rating`, preserving document order
///
/// `rating` returns a sentence's score; unrated sentences should score zero.
/// The result holds `count.resolve(sentences.len())` sentences.
pub fn select_best_sentences<'d, F>(
    sentences: &'d [Sentence],
    count: SentencesCount,
    rating: F,
) -> Vec<&'d Sentence>
where
    F: Fn(&Sentence) -> f64,
{
    let scores: Vec<f64> = sentences.iter().map(&rating).collect();
    best_indices(&scores, count.resolve(sentences.len()))
        .into_iter()
        .map(|i| &sentences[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn make_document() -> Document {
        Document::from_word_lists([
            vec!["first"],
            vec!["second"],
            vec!["third"],
            vec!["fourth"],
        ])
    }

    fn texts<'a>(sentences: &[&'a Sentence]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_document_order() {
        let doc = make_document();
        let scores = [0.1, 0.9, 0.0, 0.5];

        let picked = select_best_sentences(doc.sentences(), SentencesCount::Absolute(2), |s| {
            scores[s.index]
        });

        assert_eq!(texts(&picked), vec!["second", "fourth"]);
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let doc = make_document();
        let picked = select_best_sentences(doc.sentences(), SentencesCount::Absolute(2), |_| 0.0);
        assert_eq!(texts(&picked), vec!["first", "second"]);

        assert_eq!(best_indices(&[0.5, 1.0, 0.5, 0.5], 2), vec![0, 1]);
    }

    #[test]
    fn test_count_bounds() {
        let doc = make_document();

        let all = select_best_sentences(doc.sentences(), SentencesCount::Absolute(10), |_| 1.0);
        assert_eq!(texts(&all), vec!["first", "second", "third", "fourth"]);

        let none = select_best_sentences(doc.sentences(), SentencesCount::Absolute(0), |_| 1.0);
        assert!(none.is_empty());

        let half = select_best_sentences(doc.sentences(), SentencesCount::Percentage(50), |s| {
            s.index as f64
        });
        assert_eq!(texts(&half), vec!["third", "fourth"]);
    }

    #[test]
    fn test_empty_input() {
        let picked = select_best_sentences(&[], SentencesCount::Absolute(3), |_| 1.0);
        assert!(picked.is_empty());
        assert!(best_indices(&[], 3).is_empty());
    }
}
