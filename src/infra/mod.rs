// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// File output that doesn't belong to any business layer:
//
//   config_store.rs - TrainConfig as JSON
//                     Loads a run configuration for the CLI and
//                     records the configuration each run used.
//
//   metrics.rs      - Training metrics logging
//                     Writes epoch-level metrics (loss,
//                     accuracy) to a CSV file for later
//                     analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// TrainConfig JSON persistence
pub mod config_store;

/// Training metrics CSV logger
pub mod metrics;
