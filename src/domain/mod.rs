// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the system
// works with. No ndarray, no file I/O, no model code here.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A tokenised review
pub mod document;

// Core abstractions (traits) that other layers implement
pub mod traits;
