//! Result types for harvest output.
//!
//! An [`ArticleRecord`] is produced once per document; the records of a run
//! are accumulated in a [`Collection`] and serialized once at the end.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Author recorded when a document could not be retrieved.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Extracted article: title, author and joined markdown-flavored content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Text of the first level-1 heading (or level-2 if no level-1 exists).
    pub title: String,

    /// Byline with any leading "By " removed.
    pub author: String,

    /// Content blocks joined by blank lines.
    pub content: String,
}

impl ArticleRecord {
    /// Placeholder record for a document whose retrieval failed.
    ///
    /// ```rust
    /// use article_harvest::ArticleRecord;
    ///
    /// let record = ArticleRecord::failed("Quantify.htm", "timed out");
    /// assert_eq!(record.title, "Error: Quantify.htm");
    /// assert_eq!(record.author, "Unknown");
    /// assert_eq!(record.content, "Failed to fetch article: timed out");
    /// ```
    #[must_use]
    pub fn failed(id: &str, message: impl std::fmt::Display) -> Self {
        Self {
            title: format!("Error: {id}"),
            author: UNKNOWN_AUTHOR.to_string(),
            content: format!("Failed to fetch article: {message}"),
        }
    }
}

/// Ordered records of one run, serialized as `{"inspiration": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// One record per input identifier, in input order.
    pub inspiration: Vec<ArticleRecord>,
}

impl Collection {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inspiration: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: ArticleRecord) {
        self.inspiration.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inspiration.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inspiration.is_empty()
    }

    /// Serialize with 2-space indentation; non-ASCII text is kept literal.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the serialized collection to `path`, followed by a newline.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}
