// ============================================================
// Layer 4: Bag-of-Words Featurizer
// ============================================================
// Converts documents into fixed-width indicator vectors:
//
//   x[j] = 1.0  if vocabulary word j occurs in the document
//   x[j] = 0.0  otherwise
//
// How often a word occurs does not matter, and words outside
// the vocabulary are dropped without notice.
//
//   vocabulary: ["good", "bad"]
//   document:   ["good", "good", "ugly"]
//   vector:     [1.0, 0.0]
//
// The featurizer only borrows the vocabulary and holds no
// other state, so featurizing the same document twice gives
// the same vector.

use ndarray::{Array1, Array2, ArrayViewMut1};

use crate::data::vocabulary::Vocabulary;
use crate::domain::document::Document;

const PROGRESS_EVERY: usize = 1000;

pub struct Featurizer<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> Featurizer<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Width of every produced vector (the vocabulary size K).
    pub fn dim(&self) -> usize {
        self.vocab.len()
    }

    /// Indicator vector for a single document.
    pub fn featurize_one(&self, doc: &Document) -> Array1<f64> {
        let mut row = Array1::zeros(self.dim());
        self.fill(doc, row.view_mut());
        row
    }

    /// One indicator row per document, shape `[docs.len(), K]`.
    pub fn featurize(&self, docs: &[Document]) -> Array2<f64> {
        let mut matrix = Array2::zeros((docs.len(), self.dim()));
        for (i, (doc, row)) in docs.iter().zip(matrix.rows_mut()).enumerate() {
            self.fill(doc, row);
            if i % PROGRESS_EVERY == 0 {
                tracing::debug!("Featurized {}/{} documents", i, docs.len());
            }
        }
        matrix
    }

    fn fill(&self, doc: &Document, mut row: ArrayViewMut1<f64>) {
        for token in doc.tokens() {
            if let Some(j) = self.vocab.index_of(token) {
                row[j] = 1.0;
            }
        }
    }
}
