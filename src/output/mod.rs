//! Export of extracted problems
//!
//! Records are written as a single JSON document of the form
//! `{"problems": [...]}`, one entry per record with basic info,
//! constraints, examples, code templates and extraction metadata.

mod templates;

pub use templates::CodeTemplates;

use crate::classify::{Category, Difficulty};
use crate::extract::{ConstraintSpec, ExampleSet};
use crate::record::ProblemRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level export document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemsFile {
    pub problems: Vec<ProblemEntry>,
}

/// One exported problem
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemEntry {
    pub basic_info: BasicInfo,
    pub constraints: ConstraintSpec,
    pub examples: ExampleSet,
    pub code_templates: CodeTemplates,
    pub metadata: Metadata,
}

/// Identity and classification of a problem
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub question_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub tags: Vec<String>,
    pub source: String,
}

/// Extraction provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub extracted_from: String,
    pub confidence: f64,
    pub notes: String,
}

impl From<&ProblemRecord> for ProblemEntry {
    fn from(record: &ProblemRecord) -> Self {
        Self {
            basic_info: BasicInfo {
                question_id: record.id.clone(),
                title: record.title.clone(),
                description: record.description.clone(),
                difficulty: record.difficulty,
                category: record.category,
                tags: record.tags.clone(),
                source: record.provenance.clone(),
            },
            constraints: record.constraints.clone(),
            examples: record.examples.clone(),
            code_templates: CodeTemplates::default(),
            metadata: Metadata {
                extracted_from: record.provenance.clone(),
                confidence: record.confidence,
                notes: format!("Extracted from Project CodeNet problem {}", record.id),
            },
        }
    }
}

impl ProblemsFile {
    pub fn from_records(records: &[ProblemRecord]) -> Self {
        Self {
            problems: records.iter().map(ProblemEntry::from).collect(),
        }
    }

    /// Serialize to JSON. Non-ASCII text is written as-is.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize problems")
    }
}

/// Write records to `path` as a problems file
pub fn write_problems(path: &Path, records: &[ProblemRecord], pretty: bool) -> Result<()> {
    let json = ProblemsFile::from_records(records).to_json(pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;

    Ok(())
}

/// Print one record as a JSON entry
pub fn print_record_json(record: &ProblemRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(&ProblemEntry::from(record))
        .context("Failed to serialize problem")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::extract;
    use serde_json::Value;
    use tempfile::TempDir;

    fn sample_record() -> ProblemRecord {
        extract(
            r#"<html><body>
<h1>数の和</h1>
<h2>Constraints</h2><p>1 ≤ N ≤ 100</p>
<h2>Sample Input</h2><pre>1 2</pre>
<h2>Sample Output</h2><pre>3</pre>
</body></html>"#,
            "p00042",
        )
        .unwrap()
    }

    #[test]
    fn test_wire_shape() {
        let file = ProblemsFile::from_records(&[sample_record()]);
        let value: Value = serde_json::from_str(&file.to_json(false).unwrap()).unwrap();

        let entry = &value["problems"][0];
        assert_eq!(entry["basicInfo"]["questionId"], "p00042");
        assert_eq!(entry["basicInfo"]["title"], "数の和");
        assert_eq!(entry["basicInfo"]["difficulty"], "Easy");
        assert_eq!(entry["basicInfo"]["source"], "p00042");
        assert!(entry["basicInfo"]["tags"].is_array());
        assert!(entry["constraints"]["timeLimit"].is_null());
        assert_eq!(entry["constraints"]["inputConstraints"]["description"], "1 ≤ N ≤ 100");
        assert_eq!(entry["examples"]["sampleCases"][0]["input"], "1 2");
        assert_eq!(entry["examples"]["sampleCases"][0]["explanation"], "");
        assert!(entry["examples"]["testCases"].as_array().unwrap().is_empty());
        assert!(entry["codeTemplates"]["python"].is_string());
        assert_eq!(entry["metadata"]["extractedFrom"], "p00042");
        assert_eq!(
            entry["metadata"]["notes"],
            "Extracted from Project CodeNet problem p00042"
        );
    }

    #[test]
    fn test_category_serialized_by_name() {
        let entry = ProblemEntry::from(&sample_record());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["basicInfo"]["category"], entry.basic_info.category.name());
    }

    #[test]
    fn test_non_ascii_kept() {
        let json = ProblemsFile::from_records(&[sample_record()]).to_json(true).unwrap();
        assert!(json.contains("数の和"));
        assert!(json.contains("≤"));
    }

    #[test]
    fn test_write_problems() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("problems.json");
        write_problems(&path, &[sample_record()], true).unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["problems"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let json = ProblemsFile::from_records(&[]).to_json(false).unwrap();
        assert_eq!(json, r#"{"problems":[]}"#);
    }
}
