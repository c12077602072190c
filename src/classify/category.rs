//! Topical categorization

use super::{keyword_hits, lowercase_content, Category};

/// Categories in evaluation order with their keywords. Ties go to the
/// earlier entry.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::ArraysAndStrings,
        &["array", "string", "text", "character", "sequence", "list"],
    ),
    (
        Category::MathAndLogic,
        &["math", "number", "digit", "calculate", "formula", "equation", "arithmetic"],
    ),
    (
        Category::Geometry,
        &["triangle", "circle", "coordinate", "distance", "angle", "geometry", "point"],
    ),
    (
        Category::SortingAndSearching,
        &["sort", "search", "find", "order", "binary search", "maximum", "minimum"],
    ),
    (
        Category::DynamicProgramming,
        &["dynamic", "dp", "optimization", "optimal", "recursive"],
    ),
    (
        Category::TreesAndGraphs,
        &["tree", "graph", "node", "edge", "path", "traversal", "connected"],
    ),
    (
        Category::GreedyAlgorithms,
        &["greedy", "optimal choice", "interval"],
    ),
    (
        Category::Simulation,
        &["simulate", "game", "step", "process", "move"],
    ),
    (
        Category::Implementation,
        &["implement", "program", "algorithm", "output", "print"],
    ),
];

/// Category with the most keyword hits in title and description.
///
/// Zero hits everywhere means [`Category::Implementation`].
pub fn classify_category(title: &str, description: &str) -> Category {
    let content = lowercase_content(&[title, description]);

    let mut best = Category::Implementation;
    let mut best_score = 0;
    for (category, keywords) in CATEGORY_KEYWORDS {
        let score = keyword_hits(&content, keywords);
        if score > best_score {
            best_score = score;
            best = *category;
        }
    }
    best
}
