// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// This layer wires the data, ml and infra layers together
// into a complete training run.
//
// Rules for this layer:
//   - No gradient or model math here (that's Layer 5)
//   - No argument parsing (that's Layer 1)
//   - No direct file reads or writes (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow
pub mod train_use_case;
