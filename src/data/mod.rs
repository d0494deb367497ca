// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between review files on disk and the mini-batches
// the models are trained on.
//
// The pipeline flows in this order:
//
//   train/{pos,neg}, test/{pos,neg}
//       │
//       ▼
//   DirectoryLoader   → reads files, one Document per review
//       │
//       ▼
//   Preprocessor      → lowercases and splits on whitespace
//       │
//       ▼
//   Vocabulary        → top-K training words, frozen
//       │
//       ▼
//   Featurizer        → bag-of-words indicator rows
//       │
//       ▼
//   splitter          → balanced train / validation / test sets
//       │
//       ▼
//   BatchIterator     → shuffled mini-batches per epoch
//
// Reference: Rust Book §13 (Iterators and Closures)

use thiserror::Error;

/// Reads review directories into tokenised documents
pub mod loader;

/// Lowercasing whitespace tokenizer
pub mod preprocessor;

/// Top-K word index built from the training corpus
pub mod vocabulary;

/// Documents → bag-of-words indicator vectors
pub mod featurizer;

/// Feature matrix paired with labels
pub mod dataset;

/// Seeded, class-balanced train/validation/test splits
pub mod splitter;

/// Per-epoch shuffled mini-batches
pub mod batcher;

/// Errors raised while pairing features with labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataError {
    /// Feature rows and labels cannot be paired one to one.
    #[error("Number of samples in features ({features}) and labels ({labels}) differs")]
    SizeMismatch {
        /// Rows in the feature matrix
        features: usize,
        /// Entries in the label vector
        labels: usize,
    },

    #[error("Batch size must be at least 1")]
    ZeroBatchSize,
}
