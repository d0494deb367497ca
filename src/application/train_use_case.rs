// ============================================================
// Layer 2: TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the four review directories   (Layer 4 - data)
//   Step 2: Build the vocabulary from train    (Layer 4 - data)
//   Step 3: Featurize all four pools           (Layer 4 - data)
//   Step 4: Split train/validation/test        (Layer 4 - data)
//   Step 5: Save config                        (Layer 6 - infra)
//   Step 6: Build the chosen classifier        (Layer 5 - ml)
//   Step 7: Run training loop                  (Layer 5 - ml)
//   Step 8: Score the test split               (Layer 5 - ml)
//
// Steps 2-4 live in `prepare_splits`, which needs no file
// system and is deterministic for a given split_seed.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::Dataset,
    featurizer::Featurizer,
    loader::ReviewCorpus,
    splitter::{make_test, split_train_val},
    vocabulary::Vocabulary,
};
use crate::infra::{
    config_store::ConfigStore,
    metrics::{best_epoch, EpochMetrics, MetricsLogger},
};
use crate::ml::{
    classifier::Classifier,
    logistic::{LogisticConfig, LogisticRegression},
    mlp::{Mlp, MlpConfig},
    trainer::run_training,
};

/// Which classifier a run trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Logistic,
    Mlp,
}

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be loaded with `--config` and saved next
// to the metrics of every run. Fields missing from a JSON file
// take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Corpus root holding train/{pos,neg} and test/{pos,neg}
    pub data_dir:      String,
    /// Where train_config.json and the metrics CSV are written
    pub run_dir:       String,
    pub model:         ModelKind,
    pub batch_size:    usize,
    /// Rows in the training split, half from each class
    pub train_size:    usize,
    pub vocab_size:    usize,
    pub learning_rate: f64,
    /// MLP output units; only unit 0 is scored
    pub n_outputs:     usize,
    pub hidden_sizes:  Vec<usize>,
    pub epochs:        usize,
    /// Seeds the train/validation/test shuffles
    pub split_seed:    u64,
    /// Seeds weight init and batch order. None draws from the OS.
    pub batch_seed:    Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:      "data/aclImdb".to_string(),
            run_dir:       "runs".to_string(),
            model:         ModelKind::Logistic,
            batch_size:    20,
            train_size:    20000,
            vocab_size:    2000,
            learning_rate: 0.1,
            n_outputs:     1,
            hidden_sizes:  vec![20],
            epochs:        300,
            split_seed:    42,
            batch_seed:    None,
        }
    }
}

impl TrainConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be at least 1");
        }
        if self.vocab_size == 0 {
            bail!("vocab_size must be at least 1");
        }
        if self.n_outputs == 0 {
            bail!("n_outputs must be at least 1");
        }
        if self.hidden_sizes.iter().any(|&h| h == 0) {
            bail!("hidden layer widths must be at least 1, got {:?}", self.hidden_sizes);
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            bail!("learning_rate must be a finite non-negative number, got {}", self.learning_rate);
        }
        Ok(())
    }
}

/// Everything `prepare_splits` produces from a corpus.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub vocab: Vocabulary,
    pub train: Dataset,
    pub val:   Dataset,
    pub test:  Dataset,
}

/// Vocabulary → featurize → split. Pure given `cfg.split_seed`.
pub fn prepare_splits(corpus: &ReviewCorpus, cfg: &TrainConfig) -> PreparedData {
    let vocab = Vocabulary::build(corpus.training_documents(), cfg.vocab_size);
    if vocab.is_empty() {
        tracing::warn!("Vocabulary is empty: every feature vector will be all zeros");
    }

    let featurizer = Featurizer::new(&vocab);
    let train_pos = featurizer.featurize(&corpus.train_pos);
    let train_neg = featurizer.featurize(&corpus.train_neg);
    let test_pos  = featurizer.featurize(&corpus.test_pos);
    let test_neg  = featurizer.featurize(&corpus.test_neg);

    let mut rng = StdRng::seed_from_u64(cfg.split_seed);
    let (train, val) = split_train_val(&train_pos, &train_neg, cfg.train_size, &mut rng);
    let test = make_test(&test_pos, &test_neg, &mut rng);

    tracing::info!(
        "Prepared splits: {} train, {} validation, {} test ({} features)",
        train.len(),
        val.len(),
        test.len(),
        vocab.len()
    );

    PreparedData { vocab, train, val, test }
}

/// Outcome of one training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub history:       Vec<EpochMetrics>,
    /// Epoch with the lowest validation loss, if any was finite
    pub best_epoch:    Option<usize>,
    pub test_loss:     f64,
    pub test_accuracy: f64,
}

/// Build the configured classifier for `input_size` features.
fn build_model(cfg: &TrainConfig, input_size: usize, rng: &mut StdRng) -> Box<dyn Classifier> {
    match cfg.model {
        ModelKind::Logistic => Box::new(LogisticRegression::new(
            LogisticConfig {
                input_size,
                learning_rate: cfg.learning_rate,
            },
            rng,
        )),
        ModelKind::Mlp => Box::new(Mlp::new(
            MlpConfig {
                input_size,
                hidden_sizes:  cfg.hidden_sizes.clone(),
                n_outputs:     cfg.n_outputs,
                learning_rate: cfg.learning_rate,
            },
            rng,
        )),
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load all four review pools ───────────────────────────────
        tracing::info!("Loading reviews from '{}'", cfg.data_dir);
        let corpus = ReviewCorpus::load(&cfg.data_dir)?;
        tracing::info!(
            "Loaded {} + {} training and {} + {} test reviews",
            corpus.train_pos.len(),
            corpus.train_neg.len(),
            corpus.test_pos.len(),
            corpus.test_neg.len()
        );

        // ── Steps 2-4: Vocabulary, features, splits ──────────────────────────
        let data = prepare_splits(&corpus, cfg);

        // ── Step 5: Record the configuration of this run ─────────────────────
        ConfigStore::new(&cfg.run_dir).save_config(cfg)?;

        // ── Step 6: Build model ──────────────────────────────────────────────
        let mut rng = match cfg.batch_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let mut model = build_model(cfg, data.vocab.len(), &mut rng);
        let logger = MetricsLogger::new(&cfg.run_dir, model.name())?;

        // ── Step 7: Train ────────────────────────────────────────────────────
        let history = run_training(
            model.as_mut(),
            &data.train,
            &data.val,
            cfg,
            Some(&logger),
            &mut rng,
        )?;

        // ── Step 8: Held-out test score ──────────────────────────────────────
        let (test_loss, test_accuracy) =
            model.evaluate(data.test.features(), data.test.labels());
        tracing::info!(
            "{} test accuracy: {:.2}% (loss {:.4})",
            model.name(),
            test_accuracy * 100.0,
            test_loss
        );

        let best = best_epoch(&history).map(|m| (m.epoch, m.val_loss));
        if let Some((epoch, val_loss)) = best {
            tracing::info!("Best validation loss {:.4} at epoch {}", val_loss, epoch);
        }

        Ok(TrainReport {
            history,
            best_epoch: best.map(|(epoch, _)| epoch),
            test_loss,
            test_accuracy,
        })
    }
}
