//! Rule-based classification of extracted problems
//!
//! Every classifier is a fixed keyword table plus a deterministic decision
//! rule:
//! - Difficulty: ordinal decision over easy/medium/hard scores
//! - Category: argmax of keyword hits over nine categories
//! - Tags: keyword-set membership over eight tags

mod category;
mod difficulty;
mod tags;

pub use category::{classify_category, CATEGORY_KEYWORDS};
pub use difficulty::{problem_number, DifficultyClassifier};
pub use tags::{generate_tags, DEFAULT_TAG, TAG_KEYWORDS};

use serde::{Deserialize, Serialize};

/// Estimated difficulty of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Topical category of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Arrays & Strings")]
    ArraysAndStrings,
    #[serde(rename = "Math & Logic")]
    MathAndLogic,
    Geometry,
    #[serde(rename = "Sorting & Searching")]
    SortingAndSearching,
    #[serde(rename = "Dynamic Programming")]
    DynamicProgramming,
    #[serde(rename = "Trees & Graphs")]
    TreesAndGraphs,
    #[serde(rename = "Greedy Algorithms")]
    GreedyAlgorithms,
    Simulation,
    Implementation,
}

impl Category {
    /// Human-readable name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::ArraysAndStrings => "Arrays & Strings",
            Category::MathAndLogic => "Math & Logic",
            Category::Geometry => "Geometry",
            Category::SortingAndSearching => "Sorting & Searching",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::TreesAndGraphs => "Trees & Graphs",
            Category::GreedyAlgorithms => "Greedy Algorithms",
            Category::Simulation => "Simulation",
            Category::Implementation => "Implementation",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercased concatenation of the given texts, space separated
pub(crate) fn lowercase_content(parts: &[&str]) -> String {
    parts.join(" ").to_lowercase()
}

/// Number of keywords that occur in `content` (each counted once)
pub(crate) fn keyword_hits(content: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| content.contains(*kw)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_hits_counts_each_once() {
        assert_eq!(keyword_hits("sum sum sum count", &["sum", "count", "tree"]), 2);
        assert_eq!(keyword_hits("", &["sum"]), 0);
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::ArraysAndStrings).unwrap();
        assert_eq!(json, "\"Arrays & Strings\"");
        assert_eq!(Category::TreesAndGraphs.to_string(), "Trees & Graphs");
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"Easy\"");
    }
}
