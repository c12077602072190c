//! Record assembly: the single entry point into extraction

use super::{Completeness, ProblemRecord, RawDocument};
use crate::classify::{classify_category, generate_tags, DifficultyClassifier};
use crate::corpus::ExtractorConfig;
use crate::extract::constraints::constraints_text;
use crate::extract::{
    extract_constraints, extract_examples, ExtractError, ParsedDocument, SectionMap,
    SectionSegmenter, TitleResolver,
};
use std::panic::{self, AssertUnwindSafe};

/// Extract a record from raw HTML using default settings.
///
/// Returns `None` for empty input, for documents with neither title nor
/// description, and for documents whose extraction failed internally.
pub fn extract(raw_html: &str, identifier: &str) -> Option<ProblemRecord> {
    Extractor::default().extract_document(&RawDocument::new(identifier, raw_html))
}

/// Configured extraction pipeline
pub struct Extractor {
    segmenter: SectionSegmenter,
    difficulty: DifficultyClassifier,
    min_comment_chars: usize,
    long_description_chars: usize,
}

impl Extractor {
    /// Build a pipeline from configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        let titles = TitleResolver::new()
            .with_max_title_chars(config.max_title_chars)
            .with_max_comment_title_chars(config.max_comment_title_chars);
        let segmenter = SectionSegmenter::new()
            .with_title_resolver(titles)
            .with_sparse_description_chars(config.sparse_description_chars);

        Self {
            segmenter,
            difficulty: DifficultyClassifier::new(config.medium_id_threshold, config.hard_id_threshold),
            min_comment_chars: config.min_comment_chars,
            long_description_chars: config.long_description_chars,
        }
    }

    /// Extract one document, never failing.
    ///
    /// Internal errors and panics are logged with the document identifier and
    /// reported as `None`.
    pub fn extract_document(&self, doc: &RawDocument) -> Option<ProblemRecord> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_extract(doc))) {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                tracing::warn!("Failed to extract {}: {}", doc.identifier, e);
                None
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::warn!("Extraction of {} panicked: {}", doc.identifier, message);
                None
            }
        }
    }

    /// Section map of a document, for inspection
    pub fn sections(&self, doc: &RawDocument) -> Result<SectionMap, ExtractError> {
        let parsed = ParsedDocument::parse(&doc.text, self.min_comment_chars);
        self.segmenter.segment(&parsed)
    }

    /// Extract one document. `Ok(None)` means the document was rejected.
    pub fn try_extract(&self, doc: &RawDocument) -> Result<Option<ProblemRecord>, ExtractError> {
        if doc.text.trim().is_empty() {
            tracing::debug!("{}: empty document", doc.identifier);
            return Ok(None);
        }

        let sections = self.sections(doc)?;
        Ok(self.assemble(doc, &sections))
    }

    fn assemble(&self, doc: &RawDocument, sections: &SectionMap) -> Option<ProblemRecord> {
        let recovered_title = sections.get("title");
        let description = sections.get("description");

        if recovered_title.is_empty() && description.is_empty() {
            tracing::debug!("{}: no title or description", doc.identifier);
            return None;
        }

        let title = if recovered_title.is_empty() {
            format!("Problem {}", doc.identifier)
        } else {
            recovered_title.to_string()
        };

        let examples = extract_examples(sections);
        let constraints = extract_constraints(sections);
        let constraints_text = constraints_text(sections);

        let difficulty = self
            .difficulty
            .classify(&title, description, constraints_text, &doc.identifier);
        let category = classify_category(&title, description);
        let tags = generate_tags(&title, description);

        // the synthetic title counts as present
        let confidence = Completeness {
            title: !title.is_empty(),
            long_description: description.chars().count() > self.long_description_chars,
            examples: !examples.is_empty(),
            constraints: !constraints_text.is_empty(),
        }
        .confidence();

        Some(ProblemRecord {
            id: doc.identifier.clone(),
            title,
            description: description.to_string(),
            difficulty,
            category,
            tags,
            examples,
            constraints,
            confidence,
            provenance: doc.source.clone(),
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Category, Difficulty};
    use crate::extract::SampleCase;

    #[test]
    fn test_add_two_numbers_scenario() {
        let html = r#"<html><body>
<h1>Add Two Numbers</h1>
<h2>Constraints</h2>
<p>1 ≤ N ≤ 100</p>
</body></html>"#;

        let record = extract(html, "p00001").unwrap();
        assert_eq!(record.id, "p00001");
        assert_eq!(record.title, "Add Two Numbers");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.category, classify_category("Add Two Numbers", &record.description));
        assert!(record.examples.sample_cases.is_empty());
        assert!(record.constraints.input_constraints.ranges.contains("1 100"));
        assert_eq!(record.provenance, "p00001");
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert!(extract("", "p00001").is_none());
        assert!(extract("   \n\t ", "p00001").is_none());
    }

    #[test]
    fn test_no_content_is_absent() {
        assert!(extract("<html><body><p>x</p></body></html>", "p00002").is_none());
    }

    #[test]
    fn test_sample_pair_becomes_one_example() {
        let html = r#"<html><body>
<h1>Echo</h1>
<h2>Sample Input</h2><pre>
hello
</pre>
<h2>Sample Output</h2><pre>
hello
</pre>
</body></html>"#;

        let record = extract(html, "p00003").unwrap();
        assert_eq!(
            record.examples.sample_cases,
            vec![SampleCase {
                input: "hello".to_string(),
                output: "hello".to_string(),
                explanation: String::new(),
            }]
        );
    }

    #[test]
    fn test_comment_only_document() {
        let html = "<html><body><!-- <p>長い説明文がここに入ります、二つの整数を読み込みなさい。次の文。</p> --></body></html>";

        let record = extract(html, "p00004").unwrap();
        assert_eq!(record.title, "長い説明文がここに入ります、二つの整数を読み込みなさい");
        assert!(record.description.contains("次の文"));
    }

    #[test]
    fn test_short_comment_only_document_is_absent() {
        // 12 characters, below the comment threshold
        let html = "<html><body><!-- <p>長い説明文……。次の文。</p> --></body></html>";
        assert!(extract(html, "p00004").is_none());
    }

    #[test]
    fn test_long_description_threshold_is_separate() {
        let html = "<html><body><h1>Plain</h1><h2>Input</h2><pre>N</pre><p>Short statement text.</p></body></html>";
        let doc = RawDocument::new("p00012", html);

        let default = Extractor::default().extract_document(&doc).unwrap();
        assert_eq!(default.confidence, 0.6);

        let config = ExtractorConfig {
            long_description_chars: 5,
            ..ExtractorConfig::default()
        };
        let lenient = Extractor::new(&config).extract_document(&doc).unwrap();
        assert_eq!(lenient.confidence, 0.8);
        assert_eq!(lenient.description, default.description);

        let config = ExtractorConfig {
            sparse_description_chars: 5,
            ..ExtractorConfig::default()
        };
        let sparse = Extractor::new(&config).extract_document(&doc).unwrap();
        assert_eq!(sparse.confidence, 0.6);
    }

    #[test]
    fn test_synthetic_title_when_only_description() {
        let html = r#"<html><body>
<h2>Input</h2>
<h2>Output</h2>
<div>A farmer owns several fields and wants to plant each one with wheat or barley.</div>
</body></html>"#;

        let record = extract(html, "p00005").unwrap();
        assert_eq!(record.title, "Problem p00005");
        assert!(record.description.starts_with("A farmer owns several fields"));
        // synthetic title + long description
        assert_eq!(record.confidence, 0.8);
    }

    #[test]
    fn test_full_record_confidence_capped() {
        let html = r#"<html><body>
<h1>Sum of Integers</h1>
<p>Given a list of integers, compute the total and report it on one line.</p>
<h2>Input</h2><pre>N and N integers</pre>
<h2>Output</h2><pre>The total</pre>
<h2>Constraints</h2><pre>1 ≤ N ≤ 10^5</pre>
<h2>Sample Input</h2><pre>3 1 2 3</pre>
<h2>Sample Output</h2><pre>6</pre>
</body></html>"#;

        let record = extract(html, "p00006").unwrap();
        assert_eq!(record.confidence, 1.0);
        assert_eq!(record.examples.sample_cases.len(), 1);
        assert!(!record.tags.is_empty());
    }

    #[test]
    fn test_malformed_markup_never_panics() {
        let inputs = [
            "<h1>Broken",
            "<html><body><h2>Input<p>unterminated",
            "<<<>>>",
            "<!-- never closed",
            "<h3>Problem Statement</h3><p>Only a label",
            "\u{0}\u{1}<div",
        ];
        for html in inputs {
            let _ = extract(html, "p09999");
        }
        assert_eq!(extract("<h1>Broken", "p09999").unwrap().title, "Broken");
    }

    #[test]
    fn test_deterministic_output() {
        let html = "<html><body><h1>Graph Tour</h1><p>Visit every node of the tree.</p><h2>Input</h2><pre>N</pre></body></html>";
        let first = extract(html, "p02500").unwrap();
        let second = extract(html, "p02500").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.category, Category::TreesAndGraphs);
        assert_eq!(first.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_config_thresholds_are_used() {
        let config = ExtractorConfig {
            hard_id_threshold: 10,
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(&config);
        let doc = RawDocument::new("p00011", "<h1>Plain</h1>");
        assert_eq!(extractor.extract_document(&doc).unwrap().difficulty, Difficulty::Hard);
    }
}
