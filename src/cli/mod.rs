// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
//   `train` - featurize a review corpus and train either
//             classifier, printing one line per epoch
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs};

use crate::application::train_use_case::{TrainConfig, TrainUseCase};
use crate::infra::config_store::load_config_file;

/// The main CLI struct. clap generates the parser from its fields.
#[derive(Parser, Debug)]
#[command(
    name = "sentiment-classifiers",
    version = "0.1.0",
    about = "Train bag-of-words logistic regression and MLP sentiment classifiers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
        }
    }
}

/// Resolve the run configuration from `--config` or the flags.
fn resolve_config(args: TrainArgs) -> Result<TrainConfig> {
    if let Some(path) = &args.config {
        tracing::info!("Loading training config from '{}'", path);
        return load_config_file(path);
    }
    Ok(args.into())
}

fn run_train(args: TrainArgs) -> Result<()> {
    let cfg = resolve_config(args)?;
    tracing::info!("Starting training on reviews in: {}", cfg.data_dir);

    let report = TrainUseCase::new(cfg).execute()?;

    println!(
        "Training complete. Test accuracy: {:.2}% (loss {:.4})",
        report.test_accuracy * 100.0,
        report.test_loss
    );
    if let Some(epoch) = report.best_epoch {
        println!("Lowest validation loss at epoch {epoch}");
    }
    Ok(())
}
