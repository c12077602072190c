//! Topical tags

use super::lowercase_content;

/// Tag used when nothing else matches
pub const DEFAULT_TAG: &str = "implementation";

/// Tags in output order with the keywords that trigger them
pub const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("array", &["array", "list", "sequence"]),
    ("string", &["string", "text", "character"]),
    ("math", &["math", "number", "calculation", "arithmetic"]),
    ("geometry", &["triangle", "circle", "coordinate", "geometry"]),
    ("sorting", &["sort", "order", "maximum", "minimum"]),
    ("graph", &["graph", "tree", "node", "path"]),
    ("simulation", &["simulate", "game", "process"]),
    ("implementation", &["implement", "program", "output"]),
];

/// Tags whose keywords occur in description or title, in table order.
/// Never empty.
pub fn generate_tags(title: &str, description: &str) -> Vec<String> {
    let content = lowercase_content(&[description, title]);

    let tags: Vec<String> = TAG_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| content.contains(kw)))
        .map(|(tag, _)| tag.to_string())
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        tags
    }
}
