//! Article content extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag classification for the converter
//! - `state`: Per-document conversion state (flags, list stack, buffers)
//! - `handlers`: Start, end and text transitions of the converter
//! - `fallback`: Regex extraction over raw markup
//! - `pipeline`: Converter then fallback, assembling the record
//!
//! # Usage
//!
//! ```rust
//! use article_harvest::dom;
//! use article_harvest::extractor::{handlers, ParseState};
//! use article_harvest::Options;
//!
//! let opts = Options::default();
//! let mut state = ParseState::new();
//! for event in dom::events("<h1>Title</h1><p>Body</p>") {
//!     handlers::handle_event(&mut state, &event, &opts);
//! }
//! let converted = state.finish();
//! assert_eq!(converted.title, "Title");
//! assert_eq!(converted.blocks.len(), 1);
//! ```

pub mod fallback;
pub mod handlers;
pub mod pipeline;
pub mod state;
pub mod tags;

pub use fallback::extract_text_fallback;
pub use pipeline::{convert, convert_events, extract_article};
pub use state::{Converted, ParseState};
pub use tags::TagKind;
