// ============================================================
// Layer 3: Core Traits
// ============================================================
// ReviewCorpus pulls its four pools through this trait, so
// a directory on disk and documents already in memory are
// interchangeable.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce tokenised documents.
///
/// Implementations:
///   - DirectoryLoader → one document per file in a directory
///   - Vec<Document>   → documents already in memory
pub trait DocumentSource {
    /// Load all available documents from this source.
    fn load_all(&self) -> Result<Vec<Document>>;
}

impl DocumentSource for Vec<Document> {
    fn load_all(&self) -> Result<Vec<Document>> {
        Ok(self.clone())
    }
}
