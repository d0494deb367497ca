// ============================================================
// Layer 5: Training Loop
// ============================================================
// Epoch loop shared by both classifiers.
//
// Each epoch:
//   1. BatchIterator draws a fresh permutation of the training rows
//   2. model.fit() takes one gradient step per mini-batch
//   3. The whole training split and the whole validation split
//      are scored once (loss + accuracy)
//   4. One summary line is printed and appended to the CSV log
//
// There is no early stopping and nothing is checkpointed: the
// caller owns the model and keeps it after training returns.
//
// Reference: Rust Book §10 (Generic Types and Traits)

use anyhow::Result;
use rand::Rng;

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::BatchIterator, dataset::Dataset};
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::classifier::Classifier;

/// Train `model` for `cfg.epochs` epochs and return per-epoch metrics.
///
/// `rng` only drives the mini-batch order; the splits are fixed
/// before this is called.
pub fn run_training<C, R>(
    model:  &mut C,
    train:  &Dataset,
    val:    &Dataset,
    cfg:    &TrainConfig,
    logger: Option<&MetricsLogger>,
    rng:    &mut R,
) -> Result<Vec<EpochMetrics>>
where
    C: Classifier + ?Sized,
    R: Rng + ?Sized,
{
    let mut batches = BatchIterator::over(train, cfg.batch_size)?;
    tracing::info!(
        "Training {} on {} rows ({} batches of up to {}) for {} epochs",
        model.name(),
        train.len(),
        batches.num_batches(),
        cfg.batch_size,
        cfg.epochs,
    );

    let mut history = Vec::with_capacity(cfg.epochs);

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        for (x, y) in batches.epoch(rng) {
            model.fit(&x, &y);
        }

        let (train_loss, train_acc) = model.evaluate(train.features(), train.labels());
        let (val_loss, val_acc)     = model.evaluate(val.features(), val.labels());

        println!(
            "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4} | train_acc={:.1}% | val_acc={:.1}%",
            epoch, cfg.epochs, train_loss, val_loss,
            train_acc * 100.0, val_acc * 100.0,
        );

        let metrics = EpochMetrics::new(epoch, train_loss, val_loss, train_acc, val_acc);
        if let Some(logger) = logger {
            logger.log(&metrics)?;
        }
        history.push(metrics);
    }

    tracing::info!("Training complete!");
    Ok(history)
}
