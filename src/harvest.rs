//! Sequential harvest over a list of documents.
//!
//! Each document is retrieved and converted to completion before the next
//! one starts. A retrieval failure becomes a placeholder record and never
//! stops the run; the output is written once, after the last document.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::catalog::{default_documents, parse_manifest, DEFAULT_BASE_URL};
use crate::extractor::extract_article;
use crate::fetch::{DocumentSource, HttpSource};
use crate::result::{ArticleRecord, Collection};
use crate::{Error, Options, Result};

/// Number of records listed by [`summary_lines`].
pub const SUMMARY_LEN: usize = 5;

/// Settings for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Location the document identifiers resolve against.
    ///
    /// Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Document identifiers, in output order.
    ///
    /// Default: the bundled catalog
    pub documents: Vec<String>,

    /// Path of the JSON output file.
    ///
    /// Default: `articles.json`
    pub output: PathBuf,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Pause between consecutive requests; none after the last document.
    ///
    /// Default: 500 ms
    pub delay: Duration,

    /// `User-Agent` header sent with each request.
    ///
    /// Default: `Mozilla/5.0`
    pub user_agent: String,

    /// Conversion options.
    pub options: Options,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            documents: default_documents(),
            output: PathBuf::from("articles.json"),
            timeout: Duration::from_secs(30),
            delay: Duration::from_millis(500),
            user_agent: "Mozilla/5.0".to_string(),
            options: Options::default(),
        }
    }
}

impl HarvestConfig {
    /// Replace the document list with the identifiers listed in a manifest.
    pub fn load_manifest(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.documents = parse_manifest(&text);
        if self.documents.is_empty() {
            return Err(Error::Config(format!(
                "manifest {} lists no documents",
                path.display()
            )));
        }
        Ok(())
    }

    /// Keep only the first `limit` documents.
    pub fn truncate(&mut self, limit: usize) {
        self.documents.truncate(limit);
    }

    /// Check the configuration before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.documents.is_empty() {
            return Err(Error::Config("no documents to harvest".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base URL is empty".to_string()));
        }
        Ok(())
    }
}

/// Retrieve and convert every configured document, in order.
///
/// Never fails: documents that cannot be retrieved produce
/// [`ArticleRecord::failed`] placeholders.
pub fn harvest<S>(source: &S, config: &HarvestConfig) -> Collection
where
    S: DocumentSource + ?Sized,
{
    let total = config.documents.len();
    let mut collection = Collection::with_capacity(total);

    for (idx, id) in config.documents.iter().enumerate() {
        info!("[{}/{}] Processing: {}", idx + 1, total, id);

        let record = match source.fetch(id) {
            Ok(html) => extract_article(&html, &config.options),
            Err(e) => {
                warn!(document = %id, error = %e, "Error fetching document");
                ArticleRecord::failed(id, &e)
            }
        };
        collection.push(record);

        if idx + 1 < total && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }
    }

    collection
}

/// Run a full harvest over HTTP and write the output file.
pub fn run(config: &HarvestConfig) -> Result<Collection> {
    config.validate()?;
    let source = HttpSource::new(&config.base_url, config.timeout, &config.user_agent)?;

    let collection = harvest(&source, config);
    collection.write_to(&config.output)?;
    info!(
        articles = collection.len(),
        output = %config.output.display(),
        "Output written"
    );

    Ok(collection)
}

/// `title by author` lines for the first few records, plus a remainder line.
///
/// ```rust
/// use article_harvest::harvest::summary_lines;
/// use article_harvest::{ArticleRecord, Collection};
///
/// let mut collection = Collection::default();
/// collection.push(ArticleRecord {
///     title: "Quantify".into(),
///     author: "Keith Braithwaite".into(),
///     content: String::new(),
/// });
/// assert_eq!(summary_lines(&collection), ["1. Quantify by Keith Braithwaite"]);
/// ```
#[must_use]
pub fn summary_lines(collection: &Collection) -> Vec<String> {
    let mut lines: Vec<String> = collection
        .inspiration
        .iter()
        .take(SUMMARY_LEN)
        .enumerate()
        .map(|(idx, record)| format!("{}. {} by {}", idx + 1, record.title, record.author))
        .collect();

    let remaining = collection.len().saturating_sub(SUMMARY_LEN);
    if remaining > 0 {
        lines.push(format!("... and {remaining} more articles"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    struct MapSource {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl MapSource {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(id, html)| ((*id).to_string(), (*html).to_string()))
                    .collect(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl DocumentSource for MapSource {
        fn fetch(&self, id: &str) -> Result<String> {
            self.requested.borrow_mut().push(id.to_string());
            self.pages
                .get(id)
                .cloned()
                .ok_or_else(|| Error::Fetch("HTTP Error 404: Not Found".to_string()))
        }
    }

    fn config(ids: &[&str]) -> HarvestConfig {
        HarvestConfig {
            documents: ids.iter().map(ToString::to_string).collect(),
            delay: Duration::ZERO,
            ..HarvestConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = HarvestConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.documents.len(), 97);
        assert_eq!(config.output, PathBuf::from("articles.json"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_harvest_in_order_with_placeholder() {
        let source = MapSource::new(&[
            ("a.htm", "<h1>A</h1><p>alpha</p>"),
            ("c.htm", "<h1>C</h1><p>gamma</p>"),
        ]);
        let collection = harvest(&source, &config(&["a.htm", "b.htm", "c.htm"]));

        assert_eq!(*source.requested.borrow(), ["a.htm", "b.htm", "c.htm"]);
        let titles: Vec<_> = collection.inspiration.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "Error: b.htm", "C"]);
        assert_eq!(collection.inspiration[1].author, "Unknown");
        assert_eq!(
            collection.inspiration[1].content,
            "Failed to fetch article: HTTP Error 404: Not Found"
        );
    }

    #[test]
    fn test_validate_rejects_empty_document_list() {
        let err = config(&[]).validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_truncate() {
        let mut config = HarvestConfig::default();
        config.truncate(3);
        assert_eq!(config.documents.len(), 3);
        config.truncate(10);
        assert_eq!(config.documents.len(), 3);
    }

    #[test]
    fn test_summary_lines_with_remainder() {
        let mut collection = Collection::default();
        for idx in 0..7 {
            collection.push(ArticleRecord {
                title: format!("T{idx}"),
                author: "X".into(),
                content: String::new(),
            });
        }
        let lines = summary_lines(&collection);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1. T0 by X");
        assert_eq!(lines[4], "5. T4 by X");
        assert_eq!(lines[5], "... and 2 more articles");
    }

    #[test]
    fn test_summary_lines_empty() {
        assert!(summary_lines(&Collection::default()).is_empty());
    }
}
