//! Recovery of text hidden inside markup comments
//!
//! Some problem pages keep a legacy or localized statement commented out.
//! When the visible structure is too thin to mine, that text is the best
//! description available.

use super::text::clean_html_text;
use scraper::node::Node;
use scraper::Html;

/// Collect the text of every comment longer than `min_chars` characters.
///
/// Each comment body is parsed again as markup and normalized; qualifying
/// fragments are joined with single spaces. Comments that yield nothing are
/// skipped.
pub fn harvest_comments(document: &Html, min_chars: usize) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Comment(comment) => Some(clean_html_text(comment)),
            _ => None,
        })
        .filter(|text| text.chars().count() > min_chars)
        .collect::<Vec<_>>()
        .join(" ")
}
