//! Word distribution for SumBasic
//!
//! Maps each stem to a weight that starts as
//! `count(stem) / number_of_distinct_stems` (an average count, not a true
//! probability) and afterwards only ever shrinks: entries are squared when a
//! sentence containing them is extracted, and removed once no remaining
//! sentence contains them.
//!
//! Lookups made while ranking go through [`Distribution::touch`], which adds an
//! unknown stem (a stopword, or one removed earlier) at weight zero. Such
//! entries can still be picked by [`Distribution::max_word`] once nothing
//! heavier is left.
//!
//! Entries remember the order in which stems were inserted.
//! [`Distribution::max_word`] breaks ties in favor of the earliest stem.

use crate::nlp::stemmer::Stemmer;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Document;
use rustc_hash::FxHashMap;

/// Insertion-ordered stem → weight table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    /// Maps live stems to their slot
    slots: FxHashMap<String, usize>,
    /// Stems in first-occurrence order
    keys: Vec<String>,
    /// Weight per slot; `None` once removed
    values: Vec<Option<f64>>,
}

impl Distribution {
    /// Build the initial distribution of a document
    ///
    /// Stopword membership is tested on the normalized raw word; counting is
    /// done on stems.
    pub fn build<S: Stemmer + ?Sized>(
        document: &Document,
        stemmer: &S,
        stopwords: &StopwordFilter,
    ) -> Self {
        let mut distribution = Self::default();

        for word in document.words() {
            if stopwords.is_stopword(word) {
                continue;
            }
            let stem = stemmer.stem_word(word);
            match distribution.slots.get(&stem).copied() {
                Some(slot) => {
                    if let Some(count) = distribution.values[slot].as_mut() {
                        *count += 1.0;
                    }
                }
                None => distribution.push(stem, 1.0),
            }
        }

        let distinct = distribution.keys.len() as f64;
        for value in distribution.values.iter_mut().flatten() {
            *value /= distinct;
        }

        distribution
    }

    /// Build a distribution from explicit weights, in the given order
    ///
    /// Later duplicates overwrite the weight but keep the first position.
    pub fn from_weights<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut distribution = Self::default();
        for (stem, weight) in weights {
            let stem = stem.into();
            match distribution.slots.get(&stem).copied() {
                Some(slot) => distribution.values[slot] = Some(weight),
                None => distribution.push(stem, weight),
            }
        }
        distribution
    }

    fn push(&mut self, stem: String, value: f64) {
        let slot = self.keys.len();
        self.slots.insert(stem.clone(), slot);
        self.keys.push(stem);
        self.values.push(Some(value));
    }

    /// Current weight of a stem
    pub fn get(&self, stem: &str) -> Option<f64> {
        self.slots.get(stem).and_then(|&slot| self.values[slot])
    }

    /// Weight of a stem, zero when absent
    #[inline]
    pub fn weight(&self, stem: &str) -> f64 {
        self.get(stem).unwrap_or(0.0)
    }

    /// Weight of a stem, inserting it at zero when absent
    ///
    /// A stem removed earlier comes back as a new entry after every live one.
    pub fn touch(&mut self, stem: &str) -> f64 {
        match self.slots.get(stem).copied() {
            Some(slot) => self.values[slot].unwrap_or(0.0),
            None => {
                self.push(stem.to_string(), 0.0);
                0.0
            }
        }
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.slots.contains_key(stem)
    }

    /// Number of live stems
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stem with the highest weight; ties go to the earliest stem
    pub fn max_word(&self) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, value) in self.values.iter().enumerate() {
            let Some(value) = *value else { continue };
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((slot, value));
            }
        }
        best.map(|(slot, _)| self.keys[slot].as_str())
    }

    /// Drop a stem entirely, returning its last weight
    pub fn remove(&mut self, stem: &str) -> Option<f64> {
        let slot = self.slots.remove(stem)?;
        self.values[slot].take()
    }

    /// Square the weight of a stem; an absent stem is inserted at zero
    pub fn square(&mut self, stem: &str) {
        let Some(slot) = self.slots.get(stem).copied() else {
            self.push(stem.to_string(), 0.0);
            return;
        };
        if let Some(value) = self.values[slot].as_mut() {
            *value *= *value;
        }
    }

    /// Live (stem, weight) pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.keys
            .iter()
            .zip(self.values.iter())
            .filter_map(|(key, value)| value.map(|v| (key.as_str(), v)))
    }
}
