//! Constraint text and numeric range mining

use super::sections::SectionMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Range templates, applied in order. All matches of all templates are kept,
/// so one expression can show up more than once.
static RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // lo ≤ x ≤ hi
        r"(\d+)\s*[≤<=]\s*\w+\s*[≤<=]\s*(\d+)",
        // x ≤ hi
        r"\w+\s*[≤<=]\s*(\d+)",
        // lo ≤ x
        r"(\d+)\s*[≤<=]\s*\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Constraints on the input as written in the statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConstraints {
    /// Full constraints section text
    pub description: String,
    /// Matched range expressions joined with "; "
    pub ranges: String,
}

/// Everything known about a problem's limits
///
/// Time limit, memory limit and language restrictions have no source
/// section and stay unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSpec {
    pub time_limit: Option<String>,
    pub memory_limit: Option<String>,
    pub input_constraints: InputConstraints,
    pub language_restrictions: Vec<String>,
}

/// Text of the first section whose key mentions "constraint"
pub fn constraints_text(sections: &SectionMap) -> &str {
    sections
        .find(|key| key.to_lowercase().contains("constraint"))
        .map(|(_, text)| text)
        .unwrap_or("")
}

/// Every range expression in `text`, one fragment per match.
///
/// Captured groups of a match are joined with a space, so `1 ≤ N ≤ 100`
/// yields `"1 100"` from the first template.
pub fn extract_ranges(text: &str) -> Vec<String> {
    RANGE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Build the constraint spec for a document
pub fn extract_constraints(sections: &SectionMap) -> ConstraintSpec {
    let text = constraints_text(sections);

    ConstraintSpec {
        input_constraints: InputConstraints {
            description: text.to_string(),
            ranges: extract_ranges(text).join("; "),
        },
        ..ConstraintSpec::default()
    }
}
