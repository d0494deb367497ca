// ============================================================
// Layer 5: Shared Numeric Helpers
// ============================================================
// Sigmoid, its derivative, binary cross-entropy and accuracy.
// Both models use these so they score and report losses the
// same way.
//
//   σ(z)   = 1 / (1 + e^(-z))
//   σ'(z)  = σ(z) · (1 − σ(z))
//   BCE    = −mean( y·ln p + (1 − y)·ln(1 − p) )

use ndarray::{Array, ArrayBase, Data, Dimension};
use ndarray::{Array1, ArrayView1};

/// Probability threshold separating class 0 from class 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Element-wise sigmoid of any array.
pub fn sigmoid_array<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(sigmoid)
}

/// Element-wise σ'(z), computed from the pre-activation.
pub fn sigmoid_derivative<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(|v| {
        let s = sigmoid(v);
        s * (1.0 - s)
    })
}

/// Mean binary cross-entropy of `proba` against 0/1 labels `y`.
///
/// No clamping: a probability of exactly 0 or 1 on the wrong
/// label gives an infinite (or NaN) loss.
pub fn binary_cross_entropy(y: ArrayView1<f64>, proba: ArrayView1<f64>) -> f64 {
    let terms: Array1<f64> = ndarray::Zip::from(y)
        .and(proba)
        .map_collect(|&t, &p| t * p.ln() + (1.0 - t) * (1.0 - p).ln());
    -terms.mean().unwrap_or(f64::NAN)
}

/// Fraction of rows where `proba >= 0.5` agrees with the label.
/// An empty batch scores 0.
pub fn accuracy(y: ArrayView1<f64>, proba: ArrayView1<f64>) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let correct = y
        .iter()
        .zip(proba.iter())
        .filter(|&(&t, &p)| {
            let predicted = if p >= DECISION_THRESHOLD { 1.0 } else { 0.0 };
            predicted == t
        })
        .count();
    correct as f64 / y.len() as f64
}
