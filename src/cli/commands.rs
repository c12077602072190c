//! Command implementations

use crate::corpus::{load_document, Corpus, ExtractorConfig};
use crate::output::{print_record_json, write_problems};
use crate::record::{ConfidenceLevel, Extractor, ProblemRecord};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Tally of one batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Documents found in the corpus
    pub total: usize,
    /// Documents that produced a record
    pub extracted: usize,
    /// Documents rejected or failed
    pub skipped: usize,
    /// Records per difficulty, keyed by name
    pub difficulties: BTreeMap<String, usize>,
    /// Records per category, keyed by name
    pub categories: BTreeMap<String, usize>,
    /// Records per confidence bucket
    pub confidence: BTreeMap<ConfidenceLevel, usize>,
}

impl BatchSummary {
    /// Tally a batch of records out of `total` documents
    pub fn from_records(records: &[ProblemRecord], total: usize) -> Self {
        let mut summary = Self {
            total,
            extracted: records.len(),
            skipped: total.saturating_sub(records.len()),
            ..Self::default()
        };

        for level in [ConfidenceLevel::High, ConfidenceLevel::Medium, ConfidenceLevel::Low] {
            summary.confidence.insert(level, 0);
        }

        for record in records {
            *summary
                .difficulties
                .entry(record.difficulty.to_string())
                .or_default() += 1;
            *summary
                .categories
                .entry(record.category.to_string())
                .or_default() += 1;
            *summary
                .confidence
                .entry(ConfidenceLevel::of(record.confidence))
                .or_default() += 1;
        }

        summary
    }
}

/// Extract every document of a corpus and write the problems file
pub fn extract_corpus(
    input: &Path,
    output: &Path,
    pretty: bool,
    config: &ExtractorConfig,
) -> Result<BatchSummary> {
    let corpus = Corpus::open(input, config.clone())?;
    let files = corpus.list_documents()?;

    println!("Extracting problems from: {:?}", corpus.root());
    println!("Found {} problem files", files.len());

    let extractor = Extractor::new(corpus.config());
    let interval = corpus.config().progress_interval;
    let mut records = Vec::new();
    let mut skipped = 0;

    for (processed, path) in files.iter().enumerate() {
        if interval > 0 && processed % interval == 0 {
            println!(
                "Processed {}/{} problems... (skipped: {})",
                processed,
                files.len(),
                skipped
            );
        }

        let doc = match corpus.load(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("{:#}", e);
                skipped += 1;
                continue;
            }
        };

        match extractor.extract_document(&doc) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!("Skipped {:?}", path);
                skipped += 1;
            }
        }
    }

    println!(
        "Successfully extracted {} problems (skipped {})",
        records.len(),
        skipped
    );

    write_problems(output, &records, pretty)?;
    println!("Saved all problems to: {:?}", output);

    Ok(BatchSummary::from_records(&records, files.len()))
}

/// Print the tally of a batch run
pub fn print_summary(summary: &BatchSummary) {
    println!("Total problems extracted: {}", summary.extracted);

    println!("\nDifficulty distribution:");
    for (difficulty, count) in &summary.difficulties {
        println!("  {}: {}", difficulty, count);
    }

    println!("\nCategory distribution:");
    for (category, count) in &summary.categories {
        println!("  {}: {}", category, count);
    }

    println!("\nConfidence distribution:");
    for (level, count) in &summary.confidence {
        println!("  {}: {}", level, count);
    }
}

/// Extract one document and print the record
pub fn inspect(file: &Path, show_sections: bool, config: &ExtractorConfig) -> Result<()> {
    let doc = load_document(file)?;
    let extractor = Extractor::new(config);

    if show_sections {
        let sections = extractor
            .sections(&doc)
            .with_context(|| format!("Failed to segment {:?}", file))?;
        let json = serde_json::to_string_pretty(&sections).context("Failed to serialize sections")?;
        println!("{}", json);
    }

    match extractor.extract_document(&doc) {
        Some(record) => print_record_json(&record)?,
        None => println!("No problem could be extracted from {:?}", file),
    }

    Ok(())
}

/// Show or initialize the configuration file
pub fn configure(path: &Path, show: bool, init: bool, force: bool) -> Result<()> {
    if init {
        if path.exists() && !force {
            anyhow::bail!(
                "Configuration already exists at {:?}. Use --force to overwrite.",
                path
            );
        }
        ExtractorConfig::default().save(path)?;
        println!("✓ Wrote default configuration to {:?}", path);
    }

    if show || !init {
        let config = ExtractorConfig::load_or_default(path)?;
        let content = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        println!("codenet-extract Configuration ({:?})", path);
        println!("===================================\n");
        println!("{}", content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::extract;
    use tempfile::TempDir;

    #[test]
    fn test_summary_tally() {
        let records = vec![
            extract("<h1>Tree walk</h1>", "p00001").unwrap(),
            extract("<h1>Plain</h1>", "p03600").unwrap(),
            extract("<h1>Plain again</h1>", "p00002").unwrap(),
        ];
        let summary = BatchSummary::from_records(&records, 5);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.extracted, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.difficulties.get("Hard"), Some(&1));
        assert_eq!(summary.difficulties.values().sum::<usize>(), 3);
        assert_eq!(summary.categories.values().sum::<usize>(), 3);
        // title only: 0.6
        assert_eq!(summary.confidence[&ConfidenceLevel::Medium], 3);
        assert_eq!(summary.confidence[&ConfidenceLevel::High], 0);
    }

    #[test]
    fn test_summary_keys_sorted() {
        let records = vec![
            extract("<h1>Plain</h1>", "p03600").unwrap(),
            extract("<h1>Plain</h1>", "p00001").unwrap(),
        ];
        let summary = BatchSummary::from_records(&records, 2);
        let keys: Vec<&String> = summary.difficulties.keys().collect();
        assert_eq!(keys, vec!["Easy", "Hard"]);
    }

    #[test]
    fn test_extract_corpus_writes_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("p00001.html"), "<h1>First</h1>").unwrap();
        std::fs::write(dir.path().join("p00002.html"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "<h1>Ignored</h1>").unwrap();

        let output = dir.path().join("problems.json");
        let summary =
            extract_corpus(dir.path(), &output, false, &ExtractorConfig::default()).unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.extracted, 1);
        assert_eq!(summary.skipped, 1);
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"questionId\":\"p00001\""));
    }

    #[test]
    fn test_extract_corpus_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = extract_corpus(
            &dir.path().join("missing"),
            &dir.path().join("out.json"),
            false,
            &ExtractorConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_configure_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codenet-extract.toml");

        configure(&path, false, true, false).unwrap();
        assert!(path.exists());
        assert!(configure(&path, false, true, false).is_err());
        configure(&path, false, true, true).unwrap();
    }
}
