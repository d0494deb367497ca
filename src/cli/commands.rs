// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the `train` subcommand and all its configurable
// flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for bad values
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use crate::application::train_use_case::{ModelKind, TrainConfig};

/// Top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a sentiment classifier on a review corpus
    Train(TrainArgs),
}

/// Classifier choice as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelArg {
    /// Logistic regression
    Logistic,
    /// Multilayer perceptron
    Mlp,
}

impl From<ModelArg> for ModelKind {
    fn from(m: ModelArg) -> Self {
        match m {
            ModelArg::Logistic => ModelKind::Logistic,
            ModelArg::Mlp      => ModelKind::Mlp,
        }
    }
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Load every setting from this JSON file; other flags are ignored
    #[arg(long)]
    pub config: Option<String>,

    /// Corpus root containing train/{pos,neg} and test/{pos,neg}
    #[arg(long, default_value = "data/aclImdb")]
    pub data_dir: String,

    /// Directory for the metrics CSV and the saved run config
    #[arg(long, default_value = "runs")]
    pub run_dir: String,

    /// Which classifier to train
    #[arg(long, value_enum, default_value_t = ModelArg::Logistic)]
    pub model: ModelArg,

    /// Rows per mini-batch
    #[arg(long, default_value_t = 20)]
    pub batch_size: usize,

    /// Rows in the training split, half taken from each class
    #[arg(long, default_value_t = 20000)]
    pub train_size: usize,

    /// Number of most frequent training words used as features
    #[arg(long, default_value_t = 2000)]
    pub vocab_size: usize,

    /// Gradient descent step size
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// MLP output units (only the first is scored)
    #[arg(long, default_value_t = 1)]
    pub n_outputs: usize,

    /// MLP hidden layer widths, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [20])]
    pub hidden_sizes: Vec<usize>,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 300)]
    pub epochs: usize,

    /// Seed for the train/validation/test shuffles
    #[arg(long, default_value_t = 42)]
    pub split_seed: u64,

    /// Seed for weight init and batch order (random when omitted)
    #[arg(long)]
    pub batch_seed: Option<u64>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:      a.data_dir,
            run_dir:       a.run_dir,
            model:         a.model.into(),
            batch_size:    a.batch_size,
            train_size:    a.train_size,
            vocab_size:    a.vocab_size,
            learning_rate: a.learning_rate,
            n_outputs:     a.n_outputs,
            hidden_sizes:  a.hidden_sizes,
            epochs:        a.epochs,
            split_seed:    a.split_seed,
            batch_seed:    a.batch_seed,
        }
    }
}
