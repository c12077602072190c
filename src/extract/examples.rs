//! Worked example extraction from sample sections

use super::sections::SectionMap;
use serde::{Deserialize, Serialize};

/// One sample input/output pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    pub input: String,
    pub output: String,
    /// Always empty; no explanation-bearing section is recognized
    pub explanation: String,
}

impl SampleCase {
    fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            explanation: String::new(),
        }
    }
}

/// Worked examples of a problem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSet {
    pub sample_cases: Vec<SampleCase>,
    /// Never populated by HTML extraction
    pub test_cases: Vec<SampleCase>,
}

impl ExampleSet {
    pub fn is_empty(&self) -> bool {
        self.sample_cases.is_empty()
    }
}

fn is_sample_input_key(key: &str) -> bool {
    key.contains("sample input") && !is_sample_output_key(key)
}

fn is_sample_output_key(key: &str) -> bool {
    key.contains("sample output") || key.contains("output for")
}

/// Pair sample inputs with sample outputs by position.
///
/// Keys like "output for the sample input 2" count as outputs only.
/// The i-th input key pairs with the i-th output key in section order; an
/// input without a partner gets an empty output. Without any sample input
/// section the generic `input`/`output` sections are used as a single pair,
/// and only when both are non-empty.
pub fn extract_examples(sections: &SectionMap) -> ExampleSet {
    let inputs: Vec<&str> = sections
        .iter()
        .filter(|(k, _)| is_sample_input_key(k))
        .map(|(_, v)| v.trim())
        .collect();

    if inputs.is_empty() {
        return generic_pair(sections);
    }

    let outputs: Vec<&str> = sections
        .iter()
        .filter(|(k, _)| is_sample_output_key(k))
        .map(|(_, v)| v.trim())
        .collect();

    let sample_cases = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| (*input, outputs.get(i).copied().unwrap_or("")))
        .filter(|(input, output)| !input.is_empty() || !output.is_empty())
        .map(|(input, output)| SampleCase::new(input, output))
        .collect();

    ExampleSet {
        sample_cases,
        test_cases: Vec::new(),
    }
}

fn generic_pair(sections: &SectionMap) -> ExampleSet {
    let input = sections.get("input").trim();
    let output = sections.get("output").trim();

    let mut examples = ExampleSet::default();
    if !input.is_empty() && !output.is_empty() {
        examples.sample_cases.push(SampleCase::new(input, output));
    }
    examples
}
