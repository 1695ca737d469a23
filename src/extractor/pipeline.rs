//! Conversion pipeline.
//!
//! Runs one document through the tag-state converter and, when that yields
//! no content, through the regex fallback. The pipeline is infallible: any
//! input string produces an [`ArticleRecord`].

use tracing::debug;

use crate::dom::{self, HtmlEvent};
use crate::markdown::get_content;
use crate::result::ArticleRecord;
use crate::Options;

use super::fallback::extract_text_fallback;
use super::handlers::handle_event;
use super::state::{Converted, ParseState};

/// Entities still present in a title after parsing, decoded in this order.
const TITLE_ENTITIES: [(&str, &str); 3] = [("&lt;", "<"), ("&gt;", ">"), ("&amp;", "&")];

/// Run the tag-state converter over a parsed document.
#[must_use]
pub fn convert(html: &str, opts: &Options) -> Converted {
    let doc = dom::parse(html);
    let mut state = ParseState::new();
    dom::walk(&doc, |event| handle_event(&mut state, &event, opts));
    state.finish()
}

/// Run the tag-state converter over an already produced event stream.
#[must_use]
pub fn convert_events<'a, I>(events: I, opts: &Options) -> Converted
where
    I: IntoIterator<Item = &'a HtmlEvent>,
{
    let mut state = ParseState::new();
    for event in events {
        handle_event(&mut state, event, opts);
    }
    state.finish()
}

/// Extract the article record from one HTML document.
///
/// ```rust
/// use article_harvest::{extract_article, Options};
///
/// let html = r#"<h1>Quantify</h1><p class="author">By Keith Braithwaite</p>
///               <p>Fast is not a requirement.</p>"#;
/// let record = extract_article(html, &Options::default());
/// assert_eq!(record.title, "Quantify");
/// assert_eq!(record.author, "Keith Braithwaite");
/// assert_eq!(record.content, "Fast is not a requirement.");
/// ```
#[must_use]
pub fn extract_article(html: &str, opts: &Options) -> ArticleRecord {
    let converted = convert(html, opts);
    let mut content = get_content(&converted.blocks);

    if content.is_empty() && opts.use_fallback {
        content = extract_text_fallback(html, opts);
        debug!(
            recovered = !content.is_empty(),
            "converter produced no content, used fallback extractor"
        );
    }

    ArticleRecord {
        title: decode_title_entities(&converted.title),
        author: converted.author,
        content,
    }
}

/// Decode entities left in a title by double-escaped markup.
fn decode_title_entities(title: &str) -> String {
    TITLE_ENTITIES
        .iter()
        .fold(title.to_string(), |text, (entity, replacement)| {
            text.replace(entity, replacement)
        })
}
