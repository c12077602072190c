//! Corpus access
//!
//! This module locates problem documents on disk:
//! - Directory listing filtered by the configured file pattern
//! - Loading documents with lossy UTF-8 decoding

mod config;

pub use config::{ExtractorConfig, CONFIG_FILE_NAME};

use crate::record::RawDocument;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// A directory of problem statement documents
pub struct Corpus {
    /// Path to the corpus directory
    root: PathBuf,
    /// Extraction configuration
    config: ExtractorConfig,
}

impl Corpus {
    /// Open an existing corpus directory
    pub fn open<P: AsRef<Path>>(path: P, config: ExtractorConfig) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            bail!("Corpus directory not found: {:?}", root);
        }

        Ok(Self { root, config })
    }

    /// Get the corpus root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the configuration this corpus was opened with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// List document files matching the configured pattern, sorted by path
    pub fn list_documents(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in walkdir::WalkDir::new(&self.root)
            .max_depth(self.config.max_depth)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        {
            let entry = entry.with_context(|| format!("Failed to list {:?}", self.root))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.config.is_document(&name) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Load one document. The identifier is the file stem.
    pub fn load(&self, path: &Path) -> Result<RawDocument> {
        load_document(path)
    }
}

/// Read a document from disk, dropping invalid UTF-8 sequences
pub fn load_document(path: &Path) -> Result<RawDocument> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let identifier = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("Document path has no file name: {:?}", path))?;

    Ok(RawDocument::from_bytes(
        &identifier,
        &path.display().to_string(),
        &bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn corpus_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, "<h1>T</h1>").unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(Corpus::open(dir.path().join("nope"), ExtractorConfig::default()).is_err());
    }

    #[test]
    fn test_lists_matching_files_sorted() {
        let dir = corpus_with(&["p00002.html", "p00001.html", "index.html", "p00003.txt"]);
        let corpus = Corpus::open(dir.path(), ExtractorConfig::default()).unwrap();

        let names: Vec<String> = corpus
            .list_documents()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["p00001.html", "p00002.html"]);
    }

    #[test]
    fn test_keeps_its_config() {
        let dir = corpus_with(&[]);
        let config = ExtractorConfig {
            progress_interval: 3,
            ..ExtractorConfig::default()
        };
        let corpus = Corpus::open(dir.path(), config.clone()).unwrap();
        assert_eq!(corpus.config(), &config);
        assert_eq!(corpus.root(), dir.path());
    }

    #[test]
    fn test_depth_is_configurable() {
        let dir = corpus_with(&["p00001.html", "sub/p00002.html"]);

        let shallow = Corpus::open(dir.path(), ExtractorConfig::default()).unwrap();
        assert_eq!(shallow.list_documents().unwrap().len(), 1);

        let config = ExtractorConfig {
            max_depth: 2,
            ..ExtractorConfig::default()
        };
        let deep = Corpus::open(dir.path(), config).unwrap();
        assert_eq!(deep.list_documents().unwrap().len(), 2);
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let dir = corpus_with(&["p00001.html", ".cache/p00002.html"]);
        let config = ExtractorConfig {
            max_depth: 3,
            ..ExtractorConfig::default()
        };
        let corpus = Corpus::open(dir.path(), config).unwrap();
        assert_eq!(corpus.list_documents().unwrap().len(), 1);
    }

    #[test]
    fn test_load_uses_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p01234.html");
        std::fs::write(&path, b"<h1>Caf\xe9</h1>").unwrap();

        let corpus = Corpus::open(dir.path(), ExtractorConfig::default()).unwrap();
        let doc = corpus.load(&path).unwrap();
        assert_eq!(doc.identifier, "p01234");
        assert_eq!(doc.text, "<h1>Caf</h1>");
        assert!(doc.source.ends_with("p01234.html"));
    }
}
