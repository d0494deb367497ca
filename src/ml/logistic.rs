// ============================================================
// Layer 5: Logistic Regression
// ============================================================
// A single linear unit followed by a sigmoid:
//
//   p = σ(X·w + b)
//
// Training is plain batch gradient descent on binary
// cross-entropy. For a batch of n rows with error e = p − y:
//
//   ∂J/∂w = Xᵀ·e / n
//   ∂J/∂b = mean(e)
//
//   w ← w − lr · ∂J/∂w
//   b ← b − lr · ∂J/∂b
//
// No momentum and no regularisation. The loss is the shared
// unguarded cross-entropy, so a probability of exactly 0 or 1
// on the wrong label reports an infinite loss.

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ml::{classifier::Classifier, math};

/// Hyperparameters for [`LogisticRegression`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticConfig {
    /// Feature width K
    pub input_size: usize,
    /// Step size applied to every gradient
    pub learning_rate: f64,
}

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config:  LogisticConfig,
    weights: Array1<f64>, // [input_size]
    bias:    f64,
}

impl LogisticRegression {
    /// Weights and bias drawn uniformly from [-0.5, 0.5).
    pub fn new<R: Rng + ?Sized>(config: LogisticConfig, rng: &mut R) -> Self {
        let weights = Array1::from_shape_fn(config.input_size, |_| rng.gen::<f64>() - 0.5);
        let bias = rng.gen::<f64>() - 0.5;
        Self { config, weights, bias }
    }

    /// Build a model from known parameters.
    pub fn from_parameters(config: LogisticConfig, weights: Array1<f64>, bias: f64) -> Self {
        assert_eq!(weights.len(), config.input_size, "weight length must equal input_size");
        Self { config, weights, bias }
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn config(&self) -> &LogisticConfig {
        &self.config
    }
}

impl Classifier for LogisticRegression {
    fn name(&self) -> &'static str {
        "logistic"
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64> {
        let z = x.dot(&self.weights) + self.bias;
        math::sigmoid_array(&z)
    }

    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) {
        let n = x.nrows();
        if n == 0 {
            return;
        }
        let error = self.predict_proba(x) - y;

        let grad_w = x.t().dot(&error) / n as f64;
        let grad_b = error.mean().unwrap_or(0.0);

        self.weights.scaled_add(-self.config.learning_rate, &grad_w);
        self.bias -= self.config.learning_rate * grad_b;
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    fn config(input_size: usize, learning_rate: f64) -> LogisticConfig {
        LogisticConfig { input_size, learning_rate }
    }

    /// n all-zero rows labelled 0 followed by n all-one rows labelled 1.
    fn separable(n: usize, k: usize) -> (Array2<f64>, Array1<f64>) {
        let x = Array2::from_shape_fn((2 * n, k), |(i, _)| if i < n { 0.0 } else { 1.0 });
        let y = Array1::from_shape_fn(2 * n, |i| if i < n { 0.0 } else { 1.0 });
        (x, y)
    }

    #[test]
    fn test_initial_parameters_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let model = LogisticRegression::new(config(100, 0.1), &mut rng);
        assert_eq!(model.weights().len(), 100);
        assert!(model.weights().iter().all(|&w| (-0.5..0.5).contains(&w)));
        assert!((-0.5..0.5).contains(&model.bias()));
    }

    #[test]
    fn test_predict_proba_matches_formula() {
        let model = LogisticRegression::from_parameters(config(2, 0.1), array![1.0, -2.0], 0.5);
        let x = array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
        let p = model.predict_proba(&x);
        assert!((p[0] - math::sigmoid(1.5)).abs() < 1e-12);
        assert!((p[1] - math::sigmoid(-1.5)).abs() < 1e-12);
        assert!((p[2] - math::sigmoid(0.5)).abs() < 1e-12);
        assert!(p.iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn test_zero_learning_rate_leaves_parameters_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut model = LogisticRegression::new(config(4, 0.0), &mut rng);
        let (w0, b0) = (model.weights().clone(), model.bias());

        let x = Array2::from_shape_fn((6, 4), |_| rng.gen::<f64>());
        let y = array![1.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        model.fit(&x, &y);

        assert_eq!(model.weights(), &w0);
        assert_eq!(model.bias(), b0);
    }

    #[test]
    fn test_single_step_gradient() {
        let mut model =
            LogisticRegression::from_parameters(config(2, 0.5), array![0.0, 0.0], 0.0);
        // p = 0.5 everywhere, so error = 0.5 - y
        let x = array![[1.0, 0.0], [1.0, 1.0]];
        let y = array![1.0, 0.0];
        model.fit(&x, &y);

        // grad_w = [(-0.5 + 0.5)/2, (0.5)/2] = [0, 0.25]; grad_b = 0
        assert!((model.weights()[0] - 0.0).abs() < 1e-12);
        assert!((model.weights()[1] + 0.125).abs() < 1e-12);
        assert!(model.bias().abs() < 1e-12);
    }

    #[test]
    fn test_fit_reduces_loss() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut model = LogisticRegression::new(config(3, 0.5), &mut rng);
        let (x, y) = separable(10, 3);

        let before = model.loss(y.view(), model.predict_proba(&x).view());
        for _ in 0..20 {
            model.fit(&x, &y);
        }
        let after = model.loss(y.view(), model.predict_proba(&x).view());
        assert!(after < before);
    }

    #[test]
    fn test_learns_separable_data() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut model = LogisticRegression::new(config(5, 0.5), &mut rng);
        let (x, y) = separable(20, 5);

        for _ in 0..500 {
            model.fit(&x, &y);
        }
        assert_eq!(model.score(&x, &y), 1.0);
    }
}
