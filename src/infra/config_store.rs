// ============================================================
// Layer 6: Config Store
// ============================================================
// Reads and writes TrainConfig as pretty-printed JSON.
//
// Two uses:
//   1. `train --config <file>` loads a run configuration
//      instead of taking every value from flags
//   2. Every run writes the configuration it actually used to
//      <run_dir>/train_config.json next to the metrics CSV,
//      so a results file can always be traced back to the
//      hyperparameters and seeds that produced it
//
// Only the configuration is stored. Model parameters are never
// written to disk.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::train_use_case::TrainConfig;

/// File name used inside a run directory
pub const CONFIG_FILE: &str = "train_config.json";

/// Saves and loads training configurations in one directory.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write `cfg` to `<dir>/train_config.json`, creating the directory.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create run directory '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the configuration saved in this directory.
    pub fn load_config(&self) -> Result<TrainConfig> {
        load_config_file(self.path())
    }
}

/// Load a configuration from an arbitrary JSON file.
///
/// Missing fields fall back to `TrainConfig::default()`.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<TrainConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Invalid training config in '{}'", path.display()))
}
