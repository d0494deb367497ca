// ============================================================
// Layer 5: ML / Model Layer
// ============================================================
// Both classifiers and everything needed to train them. All
// gradients are derived by hand on ndarray matrices; there is
// no autodiff and no optimiser object, just plain gradient
// descent with a fixed learning rate.
//
// What's in this layer:
//
//   math.rs       - sigmoid, σ', binary cross-entropy, accuracy
//
//   classifier.rs - the Classifier trait the training loop
//                   is generic over
//
//   logistic.rs   - logistic regression (one linear unit)
//
//   mlp.rs        - multilayer perceptron with sigmoid layers
//                   and hand-written backpropagation
//
//   trainer.rs    - the epoch loop: mini-batches, evaluation,
//                   metrics logging
//
// Reference: Goodfellow et al. (2016) Deep Learning §6.5
//            Rust Book §10 (Traits)

/// Sigmoid, cross-entropy and accuracy helpers
pub mod math;

/// Common interface for trainable binary classifiers
pub mod classifier;

/// Logistic regression trained by gradient descent
pub mod logistic;

/// Multilayer perceptron with manual backprop
pub mod mlp;

/// Epoch loop with validation and metrics logging
pub mod trainer;
