// ============================================================
// Layer 3: Document Domain Type
// ============================================================
// A single review after tokenisation: the file it came from
// and its words, lowercased, in their original order.
//
// Fields are private so a Document cannot be edited after
// the preprocessor has produced it.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A tokenised document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename the text was read from
    source: String,

    /// Lowercase word tokens in reading order
    tokens: Vec<String>,
}

impl Document {
    /// Create a Document from a source name and an already tokenised word list.
    ///
    /// Example:
    ///   let doc = Document::new("0_9.txt", vec!["great".into(), "film".into()]);
    pub fn new(source: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            source: source.into(),
            tokens,
        }
    }

    /// Build an anonymous document from string slices. Mostly useful in tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("<memory>", words.into_iter().map(Into::into).collect())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, duplicates included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_keeps_order() {
        let doc = Document::from_words(["good", "good", "ugly"]);
        assert_eq!(doc.tokens(), &["good", "good", "ugly"]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.source(), "<memory>");
    }
}
