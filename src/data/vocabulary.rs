// ============================================================
// Layer 4: Vocabulary Builder
// ============================================================
// Counts how often each token occurs across the training
// documents and keeps the `size` most frequent ones.
//
// Ordering rules:
//   - higher count first
//   - equal counts keep the order in which the words were
//     first seen (IndexMap remembers insertion order and the
//     sort below is stable)
//
// The position of a word in the kept IndexMap IS its feature
// index, so index → word and word → index come from the same
// structure and can never disagree.
//
// The vocabulary is built from training data only and has no
// way to grow afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::document::Document;

/// Frozen mapping between the top-K words and the indices `0..K`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(with = "indexmap::map::serde_seq")]
    word_counts: IndexMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary of at most `size` words from `documents`.
    pub fn build<'a, I>(documents: I, size: usize) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for doc in documents {
            for token in doc.tokens() {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
        let distinct = counts.len();

        // sort_by is stable: ties keep first-seen order
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(size);

        tracing::info!(
            "Vocabulary built: kept {} of {} distinct tokens",
            ranked.len(),
            distinct
        );

        Self {
            word_counts: ranked.into_iter().collect(),
        }
    }

    /// Number of words K, which is also the feature vector width.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// Feature index of `word`, if it made the cut.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_counts.get_index_of(word)
    }

    /// Word stored at feature index `index`.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.word_counts.get_index(index).map(|(w, _)| w.as_str())
    }

    /// Training-corpus count of `word`, if it made the cut.
    pub fn count(&self, word: &str) -> Option<usize> {
        self.word_counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_counts.contains_key(word)
    }

    /// Words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.word_counts.keys().map(String::as_str)
    }

    /// `(word, count)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.word_counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
