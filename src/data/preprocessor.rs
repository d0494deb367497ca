// ============================================================
// Layer 4: Text Preprocessor
// ============================================================
// Turns raw review text into a Document.
//
// Steps (applied in order):
//   1. Lowercase the whole text (Unicode aware)
//   2. Split on any run of whitespace
//
// Punctuation is kept attached to words ("great!" and "great"
// are different tokens). HTML fragments such as "<br" survive
// as tokens too; the vocabulary cut-off decides whether they
// matter.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::document::Document;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase `text` and split it into whitespace-delimited tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Tokenise `text` and wrap the result with its source name.
    pub fn document(&self, source: impl Into<String>, text: &str) -> Document {
        Document::new(source, self.tokenize(text))
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
