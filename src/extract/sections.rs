//! Heading-driven segmentation of problem statements
//!
//! Splits a document into an ordered map of canonical section names to
//! plain text:
//! - Labeled headings (English and Japanese synonyms) become canonical keys
//! - Remaining `h2` headings become keys named after their own text
//! - The description is assembled from several fallbacks

use super::text::node_text;
use super::title::TitleResolver;
use super::{selector, ExtractError, ParsedDocument};
use ego_tree::NodeId;
use regex::Regex;
use scraper::ElementRef;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Heading text that signals the document has a section structure at all
static SECTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Input|Constraints|入力|制約)").unwrap());

/// Canonical section keys and the heading strings recognized for each.
/// Order matters: earlier keys claim headings first.
pub const SECTION_SYNONYMS: &[(&str, &[&str])] = &[
    ("input", &["Input", "入力", "input"]),
    ("output", &["Output", "出力", "output"]),
    ("constraints", &["Constraints", "制約", "constraints"]),
    (
        "sample input",
        &["Sample Input", "Sample Input 1", "入力例", "sample input"],
    ),
    (
        "sample output",
        &["Sample Output", "Sample Output 1", "出力例", "sample output"],
    ),
];

/// Words that mark a block as section scaffolding rather than description
const SECTION_WORDS: &[&str] = &["Input", "Output", "Constraints", "Sample"];

/// Heading used by pages that label the statement explicitly
pub const PROBLEM_STATEMENT_LABEL: &str = "Problem Statement";

/// Heading level of an HTML element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl HeadingLevel {
    /// Level for a tag name such as `h2`, `None` for non-headings
    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}

/// Ordered mapping from section key to plain text
///
/// Missing keys read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for `key`, or `""` when the key is absent
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set `key`, replacing an existing value in place
    pub fn insert(&mut self, key: &str, text: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((key.to_string(), text)),
        }
    }

    /// Set `key` only if it is not populated yet. Returns whether it was set.
    pub fn fill(&mut self, key: &str, text: String) -> bool {
        if self.contains(key) {
            return false;
        }
        self.entries.push((key.to_string(), text));
        true
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First key satisfying `predicate`, with its text
    pub fn find(&self, predicate: impl Fn(&str) -> bool) -> Option<(&str, &str)> {
        self.iter().find(|(k, _)| predicate(*k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, text) in &self.entries {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

/// Builds a [`SectionMap`] from a parsed document
pub struct SectionSegmenter {
    titles: TitleResolver,
    /// Descriptions shorter than this (in characters) get comment text appended
    sparse_description_chars: usize,
}

impl SectionSegmenter {
    /// Create a segmenter with default limits
    pub fn new() -> Self {
        Self {
            titles: TitleResolver::new(),
            sparse_description_chars: 50,
        }
    }

    /// Set the sparse-description threshold
    pub fn with_sparse_description_chars(mut self, chars: usize) -> Self {
        self.sparse_description_chars = chars;
        self
    }

    /// Use a custom title resolver
    pub fn with_title_resolver(mut self, titles: TitleResolver) -> Self {
        self.titles = titles;
        self
    }

    /// Segment a document.
    ///
    /// `title` is present only when a title strategy succeeded; `description`
    /// is always present, possibly empty.
    pub fn segment(&self, doc: &ParsedDocument) -> Result<SectionMap, ExtractError> {
        let mut sections = SectionMap::new();

        if let Some(title) = self.titles.resolve(doc)? {
            sections.insert("title", title);
        }

        let description = self.description(doc)?;
        sections.insert("description", description);

        let headings: Vec<ElementRef<'_>> = doc.html().select(&selector("h2, h3")?).collect();
        let consumed = labeled_sections(&headings, &mut sections);
        sweep_headings(&headings, &consumed, &mut sections);

        Ok(sections)
    }

    fn description(&self, doc: &ParsedDocument) -> Result<String, ExtractError> {
        let mut parts = lead_paragraphs(doc)?;

        if parts.join(" ").chars().count() < self.sparse_description_chars {
            let comments = doc.comment_text();
            if !comments.is_empty() {
                parts.push(comments.to_string());
            }
        }

        parts.extend(problem_statement_blocks(doc)?);
        Ok(parts.join(" "))
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical keys from synonym matches. Returns the headings that were used.
fn labeled_sections(headings: &[ElementRef<'_>], sections: &mut SectionMap) -> HashSet<NodeId> {
    let texts: Vec<String> = headings
        .iter()
        .map(|h| node_text(**h).to_lowercase())
        .collect();
    let mut consumed = HashSet::new();

    for (key, synonyms) in SECTION_SYNONYMS {
        for synonym in synonyms.iter() {
            let needle = synonym.to_lowercase();
            let Some(idx) = texts.iter().position(|t| t.contains(&needle)) else {
                continue;
            };

            let heading = headings[idx];
            let content = content_after(heading);
            if !content.is_empty() {
                sections.fill(key, content);
                consumed.insert(heading.id());
                break;
            }
        }
    }

    consumed
}

/// Every unclaimed `h2` becomes a key named after its lowercased text
fn sweep_headings(headings: &[ElementRef<'_>], consumed: &HashSet<NodeId>, sections: &mut SectionMap) {
    for heading in headings {
        if heading.value().name() != "h2" || consumed.contains(&heading.id()) {
            continue;
        }

        let key = node_text(**heading).to_lowercase();
        if key.is_empty() || sections.contains(&key) {
            continue;
        }

        let content = content_after(*heading);
        if !content.is_empty() {
            sections.fill(&key, content);
        }
    }
}

/// Text of the siblings after `heading`, up to the next heading of the same
/// or a higher level
fn content_after(heading: ElementRef<'_>) -> String {
    let level = HeadingLevel::from_tag(heading.value().name()).unwrap_or(HeadingLevel::H6);
    let mut parts = Vec::new();

    for sibling in heading.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            if HeadingLevel::from_tag(element.value().name()).is_some_and(|l| l <= level) {
                break;
            }
        }
        let text = node_text(sibling);
        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join(" ")
}

/// Paragraph and div blocks that do not mention section scaffolding.
///
/// Only used when the page has a recognizable Input/Constraints heading.
/// Blocks nested in an already collected block are skipped.
fn lead_paragraphs(doc: &ParsedDocument) -> Result<Vec<String>, ExtractError> {
    let html = doc.html();
    let has_structure = html
        .select(&selector("h2, h3")?)
        .any(|h| SECTION_HEADING_RE.is_match(&node_text(*h)));
    if !has_structure {
        return Ok(Vec::new());
    }

    let root = html
        .select(&selector("body")?)
        .next()
        .unwrap_or_else(|| html.root_element());

    let mut collected: HashSet<NodeId> = HashSet::new();
    let mut parts = Vec::new();

    for block in root.select(&selector("p, div")?) {
        if block.ancestors().any(|a| collected.contains(&a.id())) {
            continue;
        }
        let text = node_text(*block);
        if text.is_empty() || SECTION_WORDS.iter().any(|w| text.contains(w)) {
            continue;
        }
        collected.insert(block.id());
        parts.push(text);
    }

    Ok(parts)
}

/// Siblings after a literal "Problem Statement" `h3`, up to the next `h3`
/// or `hr`
fn problem_statement_blocks(doc: &ParsedDocument) -> Result<Vec<String>, ExtractError> {
    let Some(label) = find_problem_statement(doc)? else {
        return Ok(Vec::new());
    };

    let mut parts = Vec::new();
    for sibling in label.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            if matches!(element.value().name(), "h3" | "hr") {
                break;
            }
        }
        let text = node_text(sibling);
        if !text.is_empty() {
            parts.push(text);
        }
    }

    Ok(parts)
}

/// The first `h3` whose trimmed text is exactly the "Problem Statement" label
pub(crate) fn find_problem_statement(doc: &ParsedDocument) -> Result<Option<ElementRef<'_>>, ExtractError> {
    Ok(doc
        .html()
        .select(&selector("h3")?)
        .find(|h| node_text(**h) == PROBLEM_STATEMENT_LABEL))
}
