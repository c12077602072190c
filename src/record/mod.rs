//! Problem records
//!
//! A [`ProblemRecord`] is the terminal product of extraction: one per
//! accepted document, immutable once assembled.

mod assembler;

pub use assembler::{extract, Extractor};

use crate::classify::{Category, Difficulty};
use crate::extract::{ConstraintSpec, ExampleSet};
use serde::{Deserialize, Serialize};

/// Raw input for one extraction
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Problem identifier, usually the file stem (e.g. `p00001`)
    pub identifier: String,
    /// Where the document came from
    pub source: String,
    /// Document markup
    pub text: String,
}

impl RawDocument {
    /// Create a document whose source is its identifier
    pub fn new(identifier: &str, text: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            source: identifier.to_string(),
            text: text.to_string(),
        }
    }

    /// Decode raw bytes, dropping invalid UTF-8 sequences
    pub fn from_bytes(identifier: &str, source: &str, bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "");
        Self {
            identifier: identifier.to_string(),
            source: source.to_string(),
            text,
        }
    }
}

/// Structured metadata for one problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: Category,
    /// Never empty, in tag table order
    pub tags: Vec<String>,
    pub examples: ExampleSet,
    pub constraints: ConstraintSpec,
    /// Completeness heuristic in [0, 1]
    pub confidence: f64,
    /// Source the record was extracted from
    pub provenance: String,
}

/// Which parts of a document were recovered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completeness {
    pub title: bool,
    pub long_description: bool,
    pub examples: bool,
    pub constraints: bool,
}

impl Completeness {
    /// Confidence score: 0.5 base, +0.1 title, +0.2 long description,
    /// +0.2 examples, +0.1 constraints, capped at 1.0.
    ///
    /// Summed in tenths so bucket boundaries compare exactly.
    pub fn confidence(&self) -> f64 {
        let mut tenths = 5u32;
        if self.title {
            tenths += 1;
        }
        if self.long_description {
            tenths += 2;
        }
        if self.examples {
            tenths += 2;
        }
        if self.constraints {
            tenths += 1;
        }
        f64::from(tenths.min(10)) / 10.0
    }
}

/// Confidence bucket used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// High at 0.8 and above, Medium at 0.6 and above, Low otherwise
    pub fn of(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::High
        } else if confidence >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "high"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::Low => write!(f, "low"),
        }
    }
}
