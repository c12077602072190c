//! Title resolution
//!
//! Problem pages put their title in very different places. Strategies are
//! tried in order and the first non-empty result wins:
//! 1. The primary `h1` heading
//! 2. A line near a "Problem Statement" label
//! 3. Any short heading-like node that is not a section label
//! 4. The first short sentence of comment text

use super::sections::{find_problem_statement, PROBLEM_STATEMENT_LABEL};
use super::text::{collapse_whitespace, node_text, raw_text};
use super::{selector, ExtractError, ParsedDocument};

/// Section labels that are never titles
const TITLE_STOPLIST: &[&str] = &["Input", "Output", "Constraints", "Sample Input", "Sample Output"];

/// Sentence delimiter used when mining comment text
const SENTENCE_END: char = '。';

/// How many comment sentences are considered
const COMMENT_SENTENCES: usize = 3;

type TitleStrategy = fn(&TitleResolver, &ParsedDocument) -> Result<Option<String>, ExtractError>;

/// Resolves a document title through an ordered list of strategies
#[derive(Debug, Clone)]
pub struct TitleResolver {
    /// Titles found near labels or in headings must be shorter than this
    max_title_chars: usize,
    /// Comment-derived titles must be shorter than this
    max_comment_title_chars: usize,
}

impl TitleResolver {
    const STRATEGIES: &'static [(&'static str, TitleStrategy)] = &[
        ("primary_heading", TitleResolver::primary_heading),
        ("problem_statement", TitleResolver::problem_statement_line),
        ("heading_scan", TitleResolver::heading_scan),
        ("comment_sentence", TitleResolver::comment_sentence),
    ];

    /// Create a resolver with default limits
    pub fn new() -> Self {
        Self {
            max_title_chars: 100,
            max_comment_title_chars: 200,
        }
    }

    /// Set the limit for heading and label titles
    pub fn with_max_title_chars(mut self, chars: usize) -> Self {
        self.max_title_chars = chars;
        self
    }

    /// Set the limit for comment-derived titles
    pub fn with_max_comment_title_chars(mut self, chars: usize) -> Self {
        self.max_comment_title_chars = chars;
        self
    }

    /// Run the strategies in order. `None` when every strategy failed.
    pub fn resolve(&self, doc: &ParsedDocument) -> Result<Option<String>, ExtractError> {
        for (name, strategy) in Self::STRATEGIES {
            if let Some(title) = strategy(self, doc)?.filter(|t| !t.is_empty()) {
                tracing::debug!(strategy = *name, title = %title, "title resolved");
                return Ok(Some(title));
            }
        }
        Ok(None)
    }

    fn primary_heading(&self, doc: &ParsedDocument) -> Result<Option<String>, ExtractError> {
        Ok(doc
            .html()
            .select(&selector("h1")?)
            .next()
            .map(|h1| node_text(*h1)))
    }

    fn problem_statement_line(&self, doc: &ParsedDocument) -> Result<Option<String>, ExtractError> {
        let Some(label) = find_problem_statement(doc)? else {
            return Ok(None);
        };
        let Some(parent) = label.parent() else {
            return Ok(None);
        };

        let text = raw_text(parent);
        Ok(text
            .lines()
            .map(str::trim)
            .find(|line| {
                !line.is_empty()
                    && !line.contains(PROBLEM_STATEMENT_LABEL)
                    && line.chars().count() < self.max_title_chars
            })
            .map(str::to_string))
    }

    fn heading_scan(&self, doc: &ParsedDocument) -> Result<Option<String>, ExtractError> {
        Ok(doc
            .html()
            .select(&selector("h1, h2, h3, title")?)
            .map(|node| node_text(*node))
            .find(|text| {
                !text.is_empty()
                    && text.chars().count() < self.max_title_chars
                    && !TITLE_STOPLIST.contains(&text.as_str())
            }))
    }

    fn comment_sentence(&self, doc: &ParsedDocument) -> Result<Option<String>, ExtractError> {
        Ok(doc
            .comment_text()
            .split(SENTENCE_END)
            .take(COMMENT_SENTENCES)
            .map(|sentence| collapse_whitespace(sentence.trim()))
            .find(|sentence| {
                !sentence.is_empty() && sentence.chars().count() < self.max_comment_title_chars
            }))
    }
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new()
    }
}
