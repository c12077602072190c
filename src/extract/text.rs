//! Plain-text flattening of HTML subtrees

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Elements whose payload is never problem content
const SKIPPED_TAGS: &[&str] = &["script", "style"];

/// Parse a markup fragment and return its whitespace-normalized text
pub fn clean_html_text(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(markup);
    node_text(fragment.tree.root())
}

/// Whitespace-normalized text of an already parsed subtree
pub fn node_text(node: NodeRef<'_, Node>) -> String {
    collapse_whitespace(&raw_text(node))
}

/// Text of a subtree with script/style payloads and comments dropped.
/// Line structure of the source is kept.
pub fn raw_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

/// Collapse text to a single line.
///
/// Each line is trimmed, then split again on runs of two spaces, and the
/// surviving non-empty fragments are joined with one space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_line_break)
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            if SKIPPED_TAGS.contains(&element.name()) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
        Node::Comment(_) | Node::ProcessingInstruction(_) | Node::Doctype(_) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_and_style() {
        let text = clean_html_text(
            "<div><script>var x = 1;</script><style>p { color: red }</style><p>Visible</p></div>",
        );
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_collapses_lines_and_wide_spacing() {
        let text = collapse_whitespace("  first line  \n\n second   part  \r\n  third");
        assert_eq!(text, "first line second part third");
    }

    #[test]
    fn test_single_spaces_inside_a_line_survive() {
        assert_eq!(collapse_whitespace("a b c"), "a b c");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(clean_html_text(""), "");
        assert_eq!(clean_html_text("   \n "), "");
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let text = clean_html_text("<p>Unclosed <b>bold <i>text");
        assert_eq!(text, "Unclosed bold text");
    }

    #[test]
    fn test_comments_are_not_text() {
        assert_eq!(clean_html_text("<p>shown<!-- hidden --></p>"), "shown");
    }

    #[test]
    fn test_japanese_text_kept() {
        assert_eq!(clean_html_text("<p>整数 N が与えられます。</p>"), "整数 N が与えられます。");
    }
}
