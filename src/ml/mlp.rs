// ============================================================
// Layer 5: Multilayer Perceptron
// ============================================================
// A fixed stack of fully connected sigmoid layers:
//
//   a₀ = X
//   zᵢ = aᵢ₋₁·Wᵢ + bᵢ
//   aᵢ = clamp(σ(zᵢ), ε, 1 − ε)
//
// Layer widths are  input_size → hidden_sizes… → n_outputs.
// Every layer uses the same activation; there is no other
// layer type.
//
// Backpropagation (cross-entropy through sigmoid), for a
// batch of n rows and labels y broadcast over output units:
//
//   ∂J/∂a_L = (a_L − y) / (a_L · (1 − a_L))
//   ∂J/∂a_i = (∂J/∂a_{i+1} ⊙ σ'(z_{i+1})) · W_{i+1}ᵀ
//   δ_i     = ∂J/∂a_i ⊙ σ'(z_i)
//   W_i    ← W_i − lr · a_{i−1}ᵀ·δ_i / n
//   b_i    ← b_i − lr · mean_rows(δ_i)
//
// The clamp keeps a_L away from 0 and 1 so the first line
// never divides by zero.
//
// The cached z and a values live in a ForwardTrace that only
// exists for the duration of one fit() call.

use ndarray::{Array1, Array2, Axis, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ml::{classifier::Classifier, math};

/// Distance kept between any activation and the bounds 0 and 1.
pub const EPSILON: f64 = 1e-13;

/// Half-width of the uniform weight initialisation range.
const INIT_RANGE: f64 = 0.5;

/// Hyperparameters for [`Mlp`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpConfig {
    /// Feature width K
    pub input_size: usize,
    /// Width of every hidden layer, in order
    pub hidden_sizes: Vec<usize>,
    /// Width of the output layer
    pub n_outputs: usize,
    /// Step size applied to every gradient
    pub learning_rate: f64,
}

impl MlpConfig {
    /// `[input_size, hidden_sizes.., n_outputs]`
    pub fn layer_widths(&self) -> Vec<usize> {
        std::iter::once(self.input_size)
            .chain(self.hidden_sizes.iter().copied())
            .chain(std::iter::once(self.n_outputs))
            .collect()
    }
}

/// Pre-activations and activations of one forward pass.
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    /// zᵢ per layer, shape `[batch, width_i]`
    pub pre_activations: Vec<Array2<f64>>,
    /// aᵢ per layer after clamping, shape `[batch, width_i]`
    pub activations: Vec<Array2<f64>>,
}

impl ForwardTrace {
    /// Activations of the last layer.
    pub fn output(&self) -> &Array2<f64> {
        self.activations
            .last()
            .expect("a network always has at least one layer")
    }
}

#[derive(Debug, Clone)]
pub struct Mlp {
    config:  MlpConfig,
    weights: Vec<Array2<f64>>, // [width_{i-1}, width_i]
    biases:  Vec<Array1<f64>>, // [width_i]
}

impl Mlp {
    /// All weights and biases drawn uniformly from [-0.5, 0.5).
    ///
    /// Panics if `n_outputs` is zero.
    pub fn new<R: Rng + ?Sized>(config: MlpConfig, rng: &mut R) -> Self {
        assert!(config.n_outputs > 0, "an MLP needs at least one output unit");

        let widths = config.layer_widths();
        let mut weights = Vec::with_capacity(widths.len() - 1);
        let mut biases = Vec::with_capacity(widths.len() - 1);
        for pair in widths.windows(2) {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            weights.push(Array2::from_shape_fn((fan_in, fan_out), |_| {
                rng.gen_range(-INIT_RANGE..INIT_RANGE)
            }));
            biases.push(Array1::from_shape_fn(fan_out, |_| {
                rng.gen_range(-INIT_RANGE..INIT_RANGE)
            }));
        }

        tracing::debug!("MLP initialised with layer widths {:?}", widths);
        Self { config, weights, biases }
    }

    pub fn config(&self) -> &MlpConfig {
        &self.config
    }

    pub fn num_layers(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Array1<f64>] {
        &self.biases
    }

    /// Output activations for `x`, shape `[batch, n_outputs]`.
    /// Every value lies in `[EPSILON, 1 - EPSILON]`.
    pub fn forward_pass(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.to_owned();
        for (w, b) in self.weights.iter().zip(&self.biases) {
            let z = out.dot(w) + b;
            out = saturating_sigmoid(&z);
        }
        out
    }

    /// Forward pass that keeps every layer's z and a for backprop.
    pub fn forward_trace(&self, x: &Array2<f64>) -> ForwardTrace {
        let mut pre_activations = Vec::with_capacity(self.num_layers());
        let mut activations: Vec<Array2<f64>> = Vec::with_capacity(self.num_layers());

        for (w, b) in self.weights.iter().zip(&self.biases) {
            let input = activations.last().unwrap_or(x);
            let z = input.dot(w) + b;
            let a = saturating_sigmoid(&z);
            pre_activations.push(z);
            activations.push(a);
        }

        ForwardTrace { pre_activations, activations }
    }

    /// Loss gradients for every layer, in layer order: `(dW_i, db_i)`,
    /// already averaged over the batch.
    pub fn gradients(&self, x: &Array2<f64>, y: &Array1<f64>) -> Vec<(Array2<f64>, Array1<f64>)> {
        let n = x.nrows() as f64;
        let trace = self.forward_trace(x);
        let last = self.num_layers() - 1;

        let sigmoid_derivs: Vec<Array2<f64>> = trace
            .pre_activations
            .iter()
            .map(|z| math::sigmoid_derivative(z))
            .collect();

        // ∂J/∂a for the output layer, labels broadcast across output units
        let labels = y.view().insert_axis(Axis(1));
        let mut d_out = Array2::<f64>::zeros(trace.output().raw_dim());
        Zip::from(&mut d_out)
            .and(trace.output())
            .and_broadcast(&labels)
            .for_each(|d, &a, &t| *d = (a - t) / (a * (1.0 - a)));

        // δ_i = ∂J/∂a_i ⊙ σ'(z_i), walked from the output back to layer 0
        let mut deltas: Vec<Array2<f64>> = vec![Array2::zeros((0, 0)); self.num_layers()];
        deltas[last] = d_out * &sigmoid_derivs[last];
        for i in (0..last).rev() {
            let d_a = deltas[i + 1].dot(&self.weights[i + 1].t());
            deltas[i] = d_a * &sigmoid_derivs[i];
        }

        deltas
            .iter()
            .enumerate()
            .map(|(i, delta)| {
                let input = if i == 0 { x } else { &trace.activations[i - 1] };
                let grad_w = input.t().dot(delta) / n;
                let grad_b = delta
                    .mean_axis(Axis(0))
                    .unwrap_or_else(|| Array1::zeros(delta.ncols()));
                (grad_w, grad_b)
            })
            .collect()
    }
}

/// σ(z) with values at or beyond the bounds pulled back to ε / 1 − ε.
fn saturating_sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|v| math::sigmoid(v).clamp(EPSILON, 1.0 - EPSILON))
}

impl Classifier for Mlp {
    fn name(&self) -> &'static str {
        "mlp"
    }

    /// Probability from the first output unit.
    fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64> {
        self.forward_pass(x).column(0).to_owned()
    }

    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) {
        if x.nrows() == 0 {
            return;
        }
        let lr = self.config.learning_rate;
        let grads = self.gradients(x, y);
        for ((w, b), (grad_w, grad_b)) in self
            .weights
            .iter_mut()
            .zip(self.biases.iter_mut())
            .zip(grads)
        {
            w.scaled_add(-lr, &grad_w);
            b.scaled_add(-lr, &grad_b);
        }
    }
}
