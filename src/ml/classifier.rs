// ============================================================
// Layer 5: Classifier Trait
// ============================================================
// The interface the training loop uses for both models. Only
// predict_proba and fit differ per model; loss, score and
// evaluate are shared.

use ndarray::{Array1, Array2, ArrayView1};

use crate::ml::math;

/// A binary classifier trained one mini-batch at a time.
pub trait Classifier {
    /// Short name used in logs and metrics ("logistic", "mlp").
    fn name(&self) -> &'static str;

    /// Probability of class 1 for every row of `x`.
    fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64>;

    /// One gradient-descent step on the batch `(x, y)`.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>);

    /// Mean binary cross-entropy of `proba` against `y`.
    fn loss(&self, y: ArrayView1<f64>, proba: ArrayView1<f64>) -> f64 {
        math::binary_cross_entropy(y, proba)
    }

    /// Accuracy of `predict_proba(x)` thresholded at 0.5.
    fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> f64 {
        let proba = self.predict_proba(x);
        math::accuracy(y.view(), proba.view())
    }

    /// `(loss, accuracy)` over a whole split in one forward pass.
    fn evaluate(&self, x: &Array2<f64>, y: &Array1<f64>) -> (f64, f64) {
        let proba = self.predict_proba(x);
        (
            self.loss(y.view(), proba.view()),
            math::accuracy(y.view(), proba.view()),
        )
    }
}
