//! Difficulty estimation

use super::{keyword_hits, lowercase_content, Difficulty};

const EASY_KEYWORDS: &[&str] = &[
    "sum", "count", "simple", "basic", "digit", "print", "calculate", "find",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "algorithm", "sort", "search", "tree", "graph", "dynamic", "optimal", "sequence",
];

const HARD_KEYWORDS: &[&str] = &[
    "complex",
    "advanced",
    "polynomial",
    "exponential",
    "combinatorial",
    "optimization",
];

/// Magnitudes in the constraints that push toward harder buckets
const HARD_MAGNITUDES: &[&str] = &["10^9", "10^8"];
const MEDIUM_MAGNITUDES: &[&str] = &["10^6", "10^5"];

/// Numeric part of an identifier such as `p02345`.
///
/// Everything after the first character must be ASCII digits, otherwise the
/// number is 0. Values too large for `u64` saturate.
pub fn problem_number(identifier: &str) -> u64 {
    let mut chars = identifier.chars();
    if chars.next().is_none() {
        return 0;
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Keyword and identifier based difficulty classifier
#[derive(Debug, Clone)]
pub struct DifficultyClassifier {
    /// Identifiers numbered above this are at least Medium
    medium_threshold: u64,
    /// Identifiers numbered above this are Hard
    hard_threshold: u64,
}

impl DifficultyClassifier {
    pub fn new(medium_threshold: u64, hard_threshold: u64) -> Self {
        Self {
            medium_threshold,
            hard_threshold,
        }
    }

    /// Classify from title, description, constraints text and identifier.
    ///
    /// Hard if any hard signal fired or the identifier is past the hard
    /// threshold; Medium if medium hits beat easy hits or the identifier is
    /// past the medium threshold; Easy otherwise.
    pub fn classify(
        &self,
        title: &str,
        description: &str,
        constraints: &str,
        identifier: &str,
    ) -> Difficulty {
        let content = lowercase_content(&[title, description, constraints]);
        let number = problem_number(identifier);

        let easy = keyword_hits(&content, EASY_KEYWORDS);
        let mut medium = keyword_hits(&content, MEDIUM_KEYWORDS);
        let mut hard = keyword_hits(&content, HARD_KEYWORDS);

        if HARD_MAGNITUDES.iter().any(|m| constraints.contains(m)) {
            hard += 2;
        } else if MEDIUM_MAGNITUDES.iter().any(|m| constraints.contains(m)) {
            medium += 1;
        }

        if hard > 0 || number > self.hard_threshold {
            Difficulty::Hard
        } else if medium > easy || number > self.medium_threshold {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

impl Default for DifficultyClassifier {
    fn default() -> Self {
        Self::new(2000, 3500)
    }
}
