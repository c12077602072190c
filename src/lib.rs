//! codenet-extract - structured metadata from Project CodeNet problem statements
//!
//! This library turns raw HTML problem pages into problem records: title,
//! description, sections, worked examples, constraint ranges, and rule-based
//! difficulty, category and tag labels.

pub mod classify;
pub mod cli;
pub mod corpus;
pub mod extract;
pub mod output;
pub mod record;

/// Re-export commonly used types
pub use classify::{Category, Difficulty};
pub use corpus::{Corpus, ExtractorConfig};
pub use extract::{ExtractError, SectionMap};
pub use record::{extract, Extractor, ProblemRecord, RawDocument};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "codenet-extract";
