//! HTML problem statement extraction
//!
//! This module turns one raw HTML document into structured pieces:
//! - Plain text flattening of markup subtrees
//! - Text recovered from markup comments
//! - A section map keyed by canonical section names
//! - Title, worked examples and constraint ranges

pub mod comments;
pub mod constraints;
pub mod examples;
pub mod sections;
pub mod text;
pub mod title;

pub use comments::harvest_comments;
pub use constraints::{extract_constraints, extract_ranges, ConstraintSpec, InputConstraints};
pub use examples::{extract_examples, ExampleSet, SampleCase};
pub use sections::{HeadingLevel, SectionMap, SectionSegmenter};
pub use text::{clean_html_text, collapse_whitespace, node_text};
pub use title::TitleResolver;

use scraper::{Html, Selector};
use std::cell::OnceCell;
use thiserror::Error;

/// Errors raised inside the extraction core
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A CSS selector used to walk the document failed to compile
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

/// Compile a CSS selector, mapping failures into [`ExtractError`]
pub fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

/// A parsed document plus lazily harvested comment text
///
/// Several strategies fall back to comment content, so it is harvested at
/// most once per document.
pub struct ParsedDocument {
    html: Html,
    min_comment_chars: usize,
    comments: OnceCell<String>,
}

impl ParsedDocument {
    /// Parse a full HTML document. Never fails; malformed markup is repaired
    /// by the HTML5 tree builder.
    pub fn parse(markup: &str, min_comment_chars: usize) -> Self {
        Self {
            html: Html::parse_document(markup),
            min_comment_chars,
            comments: OnceCell::new(),
        }
    }

    /// The underlying DOM
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Text recovered from comments, empty if none qualified
    pub fn comment_text(&self) -> &str {
        self.comments
            .get_or_init(|| harvest_comments(&self.html, self.min_comment_chars))
    }
}
