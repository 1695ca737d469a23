//! # article-harvest
//!
//! Extracts title, author and markdown-flavored body text from article
//! pages and collects the results as JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_harvest::{extract_article, Options};
//!
//! let html = r#"<html><body><article>
//!   <h1>Stand Up!</h1>
//!   <p class="author">By Udi Dahan</p>
//!   <p>As architects, many of us have grown from <em>highly</em> technical positions.</p>
//!   <ul><li>Speak clearly</li><li>Stand up</li></ul>
//! </article></body></html>"#;
//!
//! let record = extract_article(html, &Options::default());
//! assert_eq!(record.title, "Stand Up!");
//! assert_eq!(record.author, "Udi Dahan");
//! assert_eq!(
//!     record.content,
//!     "As architects, many of us have grown from *highly* technical positions.\n\n\
//!      - Speak clearly\n- Stand up"
//! );
//! ```
//!
//! ## Features
//!
//! - **Tag-state conversion**: Paragraphs, headings, lists, definition lists
//!   and emphasis rebuilt from the parse event stream
//! - **Regex fallback**: Recovers paragraphs, headings and lists from markup
//!   the converter could not follow
//! - **Harvest**: Sequential retrieval of a document list with per-document
//!   error placeholders and a single JSON output

mod error;
mod options;
mod patterns;
mod result;

/// HTML parsing and the parse event stream.
pub mod dom;

/// Tag-state converter, fallback extractor and conversion pipeline.
pub mod extractor;

/// Content blocks and markdown-flavored text assembly.
pub mod markdown;

/// Document retrieval.
pub mod fetch;

/// Sequential harvest loop and run configuration.
pub mod harvest;

/// Default document catalog and manifest parsing.
pub mod catalog;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::extract_article;
pub use fetch::{DocumentSource, HttpSource};
pub use harvest::HarvestConfig;
pub use options::{FallbackOrder, Options};
pub use result::{ArticleRecord, Collection, UNKNOWN_AUTHOR};
