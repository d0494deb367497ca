// ============================================================
// Layer 6: Metrics Logger
// ============================================================
// Records training metrics to a CSV file after each epoch.
//
// Metrics recorded per epoch:
//   - epoch:      the epoch number (1, 2, 3, ...)
//   - train_loss: mean cross-entropy on the whole training split
//   - val_loss:   mean cross-entropy on the validation split
//   - train_acc:  accuracy on the training split
//   - val_acc:    accuracy on the validation split
//
// Output file: <run_dir>/<model>_metrics.csv
//
// Example CSV output:
//   epoch,train_loss,val_loss,train_acc,val_acc
//   1,0.512300,0.530100,0.781000,0.770000
//   2,0.401900,0.428800,0.842000,0.829000
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Mean cross-entropy over the training split after the epoch
    pub train_loss: f64,

    /// Mean cross-entropy over the validation split.
    /// NaN when the validation split is empty.
    pub val_loss: f64,

    /// Fraction of training rows classified correctly
    pub train_acc: f64,

    /// Fraction of validation rows classified correctly
    pub val_acc: f64,
}

impl EpochMetrics {
    pub fn new(
        epoch:      usize,
        train_loss: f64,
        val_loss:   f64,
        train_acc:  f64,
        val_acc:    f64,
    ) -> Self {
        Self { epoch, train_loss, val_loss, train_acc, val_acc }
    }

    /// Returns true if this epoch improved over the previous best val_loss
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// Epoch with the lowest validation loss; the earliest one wins ties.
/// None when no epoch has a finite val_loss (e.g. empty validation split).
pub fn best_epoch(history: &[EpochMetrics]) -> Option<&EpochMetrics> {
    let mut best: Option<&EpochMetrics> = None;
    for m in history {
        let best_val = best.map_or(f64::INFINITY, |b| b.val_loss);
        if m.is_improvement(best_val) {
            best = Some(m);
        }
    }
    best
}

/// Appends epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a logger writing to `<dir>/<model>_metrics.csv`.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>, model: &str) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create run directory '{}'", dir.display()))?;

        let csv_path = dir.join(format!("{model}_metrics.csv"));

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(f, "epoch,train_loss,val_loss,train_acc,val_acc")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row in the CSV.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{:.6},{:.6},{:.6},{:.6}",
            m.epoch,
            m.train_loss,
            m.val_loss,
            m.train_acc,
            m.val_acc,
        )?;

        tracing::debug!(
            "Logged epoch {} metrics: train_loss={:.4}, val_loss={:.4}",
            m.epoch,
            m.train_loss,
            m.val_loss,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 0.5, 0.45, 0.8, 0.78);
        assert!(m.is_improvement(0.6));
        assert!(!m.is_improvement(0.4));
    }

    #[test]
    fn test_best_epoch_picks_lowest_val_loss() {
        let history = vec![
            EpochMetrics::new(1, 0.7, 0.60, 0.5, 0.5),
            EpochMetrics::new(2, 0.5, 0.40, 0.7, 0.7),
            EpochMetrics::new(3, 0.3, 0.40, 0.9, 0.7),
            EpochMetrics::new(4, 0.2, 0.55, 0.9, 0.6),
        ];
        assert_eq!(best_epoch(&history).map(|m| m.epoch), Some(2));
    }

    #[test]
    fn test_best_epoch_ignores_nan_losses() {
        let history = vec![EpochMetrics::new(1, 0.7, f64::NAN, 0.5, 0.0)];
        assert!(best_epoch(&history).is_none());
        assert!(best_epoch(&[]).is_none());
    }

    #[test]
    fn test_writes_header_and_rows() {
        let tmp = TempDir::new().unwrap();
        let logger = MetricsLogger::new(tmp.path(), "logistic").unwrap();
        logger.log(&EpochMetrics::new(1, 0.7, 0.69, 0.5, 0.5)).unwrap();
        logger.log(&EpochMetrics::new(2, 0.6, 0.65, 0.7, 0.6)).unwrap();

        let text = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "epoch,train_loss,val_loss,train_acc,val_acc");
        assert_eq!(lines[1], "1,0.700000,0.690000,0.500000,0.500000");
        assert_eq!(lines.len(), 3);
        assert!(logger.csv_path().ends_with("logistic_metrics.csv"));
    }

    #[test]
    fn test_reopening_appends() {
        let tmp = TempDir::new().unwrap();
        MetricsLogger::new(tmp.path(), "mlp")
            .unwrap()
            .log(&EpochMetrics::new(1, 0.1, 0.1, 1.0, 1.0))
            .unwrap();
        let again = MetricsLogger::new(tmp.path(), "mlp").unwrap();
        again.log(&EpochMetrics::new(2, 0.1, 0.1, 1.0, 1.0)).unwrap();

        let text = fs::read_to_string(again.csv_path()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
