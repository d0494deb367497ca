// ============================================================
// Layer 4: Corpus Loader
// ============================================================
// Reads plain-text reviews from disk. The corpus root is laid
// out like the ACL IMDB release:
//
//   <root>/
//     train/pos/*.txt
//     train/neg/*.txt
//     test/pos/*.txt
//     test/neg/*.txt
//
// Every regular file in a class directory is one review. Files
// are visited in file-name order so two runs over the same
// directory produce the same document sequence. Bytes that are
// not valid UTF-8 are replaced rather than rejected.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads every file in one directory as a tokenised Document.
pub struct DirectoryLoader {
    dir: PathBuf,
    preprocessor: Preprocessor,
}

impl DirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSource for DirectoryLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut docs = Vec::with_capacity(paths.len());
        for path in &paths {
            let bytes = fs::read(path)
                .with_context(|| format!("Cannot read '{}'", path.display()))?;
            let text = String::from_utf8_lossy(&bytes);

            let source = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();

            let doc = self.preprocessor.document(source, &text);
            tracing::debug!("Loaded: {} ({} tokens)", doc.source(), doc.len());
            docs.push(doc);
        }

        tracing::info!(
            "Loaded {} documents from '{}'",
            docs.len(),
            self.dir.display()
        );
        Ok(docs)
    }
}

/// The four review pools of a sentiment corpus, already tokenised.
#[derive(Debug, Clone, Default)]
pub struct ReviewCorpus {
    pub train_pos: Vec<Document>,
    pub train_neg: Vec<Document>,
    pub test_pos:  Vec<Document>,
    pub test_neg:  Vec<Document>,
}

impl ReviewCorpus {
    /// Read `train/pos`, `train/neg`, `test/pos` and `test/neg` under `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let dir = |split: &str, class: &str| DirectoryLoader::new(root.join(split).join(class));

        Self::from_sources(
            &dir("train", "pos"),
            &dir("train", "neg"),
            &dir("test", "pos"),
            &dir("test", "neg"),
        )
    }

    /// Pull the four pools from any document sources, in the order
    /// train/pos, train/neg, test/pos, test/neg.
    pub fn from_sources<S>(train_pos: &S, train_neg: &S, test_pos: &S, test_neg: &S) -> Result<Self>
    where
        S: DocumentSource + ?Sized,
    {
        Ok(Self {
            train_pos: train_pos.load_all()?,
            train_neg: train_neg.load_all()?,
            test_pos:  test_pos.load_all()?,
            test_neg:  test_neg.load_all()?,
        })
    }

    /// Training documents in vocabulary order: positives first, then negatives.
    pub fn training_documents(&self) -> impl Iterator<Item = &Document> {
        self.train_pos.iter().chain(self.train_neg.iter())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, text: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_loads_files_in_name_order() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.txt", "Second review");
        write(tmp.path(), "a.txt", "First REVIEW here");

        let docs = DirectoryLoader::new(tmp.path()).load_all().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source(), "a.txt");
        assert_eq!(docs[0].tokens(), &["first", "review", "here"]);
        assert_eq!(docs[1].tokens(), &["second", "review"]);
    }

    #[test]
    fn test_skips_subdirectories() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.txt", "text");
        fs::create_dir_all(tmp.path().join("nested")).unwrap();

        let docs = DirectoryLoader::new(tmp.path()).load_all().unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("x.txt"), b"ok \xff\xfe fine").unwrap();

        let docs = DirectoryLoader::new(tmp.path()).load_all().unwrap();
        assert_eq!(docs[0].tokens().first().map(String::as_str), Some("ok"));
        assert_eq!(docs[0].tokens().last().map(String::as_str), Some("fine"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = DirectoryLoader::new(tmp.path().join("absent")).load_all();
        assert!(result.is_err());
    }

    #[test]
    fn test_review_corpus_layout() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(&root.join("train/pos"), "1.txt", "good");
        write(&root.join("train/pos"), "2.txt", "great");
        write(&root.join("train/neg"), "1.txt", "bad");
        write(&root.join("test/pos"), "1.txt", "fine");
        write(&root.join("test/neg"), "1.txt", "awful");

        let corpus = ReviewCorpus::load(root).unwrap();
        assert_eq!(corpus.train_pos.len(), 2);
        assert_eq!(corpus.train_neg.len(), 1);
        assert_eq!(corpus.test_pos.len(), 1);
        assert_eq!(corpus.test_neg.len(), 1);

        let order: Vec<_> = corpus
            .training_documents()
            .map(|d| d.tokens()[0].clone())
            .collect();
        assert_eq!(order, vec!["good", "great", "bad"]);
    }

    #[test]
    fn test_corpus_from_in_memory_sources() {
        let pre = Preprocessor::new();
        let pos = vec![pre.document("p1", "Loved it"), pre.document("p2", "great fun")];
        let neg = vec![pre.document("n1", "dull")];
        let empty: Vec<Document> = Vec::new();

        let corpus = ReviewCorpus::from_sources(&pos, &neg, &empty, &neg).unwrap();
        assert_eq!(corpus.train_pos, pos);
        assert_eq!(corpus.train_neg, neg);
        assert!(corpus.test_pos.is_empty());
        assert_eq!(corpus.test_neg[0].tokens(), &["dull".to_string()]);
        assert_eq!(corpus.training_documents().count(), 3);
    }

    #[test]
    fn test_corpus_from_sources_propagates_errors() {
        let tmp = TempDir::new().unwrap();
        let present: Vec<Document> = vec![Document::from_words(["ok"])];
        let missing = DirectoryLoader::new(tmp.path().join("absent"));
        let ok = DirectoryLoader::new(tmp.path());

        assert!(ReviewCorpus::from_sources(&ok, &missing, &ok, &ok).is_err());
        assert!(ReviewCorpus::from_sources(&present, &present, &present, &present).is_ok());
    }
}
