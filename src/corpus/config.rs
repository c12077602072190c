//! Extractor configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "codenet-extract.toml";

/// Configuration for a corpus extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// File name pattern for problem documents (glob pattern)
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Directory walk depth; 1 lists only the corpus directory itself
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Comment fragments must be longer than this to count
    #[serde(default = "default_min_comment_chars")]
    pub min_comment_chars: usize,

    /// Descriptions shorter than this get comment text appended
    #[serde(default = "default_sparse_description_chars")]
    pub sparse_description_chars: usize,

    /// Descriptions longer than this raise the confidence score
    #[serde(default = "default_long_description_chars")]
    pub long_description_chars: usize,

    /// Upper bound for titles taken from labels and headings
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    /// Upper bound for titles taken from comment text
    #[serde(default = "default_max_comment_title_chars")]
    pub max_comment_title_chars: usize,

    /// Problem numbers above this are at least Medium
    #[serde(default = "default_medium_id_threshold")]
    pub medium_id_threshold: u64,

    /// Problem numbers above this are Hard
    #[serde(default = "default_hard_id_threshold")]
    pub hard_id_threshold: u64,

    /// Print a progress line every this many documents (0 disables)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    /// Where the extracted problems are written
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_file_pattern() -> String {
    "p*.html".to_string()
}

fn default_max_depth() -> usize {
    1
}

fn default_min_comment_chars() -> usize {
    20
}

fn default_sparse_description_chars() -> usize {
    50
}

fn default_long_description_chars() -> usize {
    50
}

fn default_max_title_chars() -> usize {
    100
}

fn default_max_comment_title_chars() -> usize {
    200
}

fn default_medium_id_threshold() -> u64 {
    2000
}

fn default_hard_id_threshold() -> u64 {
    3500
}

fn default_progress_interval() -> usize {
    100
}

fn default_output_file() -> String {
    "extracted_problems_complete.json".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            file_pattern: default_file_pattern(),
            max_depth: default_max_depth(),
            min_comment_chars: default_min_comment_chars(),
            sparse_description_chars: default_sparse_description_chars(),
            long_description_chars: default_long_description_chars(),
            max_title_chars: default_max_title_chars(),
            max_comment_title_chars: default_max_comment_title_chars(),
            medium_id_threshold: default_medium_id_threshold(),
            hard_id_threshold: default_hard_id_threshold(),
            progress_interval: default_progress_interval(),
            output_file: default_output_file(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from `path` or return defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: ExtractorConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Check if a file name matches the document pattern
    pub fn is_document(&self, file_name: &str) -> bool {
        glob_match_simple(&self.file_pattern, file_name)
    }
}

/// Simple glob matching helper for file names.
///
/// Supports any number of `*` wildcards; everything else matches literally.
fn glob_match_simple(pattern: &str, name: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return name.is_empty();
    };
    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };

    let middle: Vec<&str> = parts.collect();
    let Some((last, inner)) = middle.split_last() else {
        // no wildcard at all
        return rest.is_empty();
    };

    for part in inner {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
