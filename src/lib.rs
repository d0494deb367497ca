// ============================================================
// sentiment-classifiers
// ============================================================
// Bag-of-words sentiment classification: a review corpus is
// turned into word-indicator vectors and fed to a logistic
// regression or a multilayer perceptron, both trained with
// hand-derived gradients.
//
//   cli         - Layer 1: argument parsing
//   application - Layer 2: training workflow
//   domain      - Layer 3: documents and sources
//   data        - Layer 4: loading, vocabulary, features, splits
//   ml          - Layer 5: models and the training loop
//   infra       - Layer 6: config JSON and metrics CSV

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;
