//! DOM parsing and event stream.
//!
//! Parses HTML with the `dom_query` crate (html5ever tree construction) and
//! replays the resulting tree as a flat stream of start-tag, end-tag and text
//! events in document order. The tag-state converter consumes that stream, so
//! it never sees the tree itself, only boundaries and text runs.

pub use dom_query::{Document, NodeRef, Selection};

/// One parse event produced while walking a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent {
    /// Element opened. `tag` is lowercase; attributes are in source order.
    Start {
        tag: String,
        attrs: Vec<(String, String)>,
    },

    /// Element closed.
    End { tag: String },

    /// Character data with entities already decoded.
    Text(String),
}

impl HtmlEvent {
    /// Build a start event without attributes.
    #[must_use]
    pub fn start(tag: &str) -> Self {
        Self::Start {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    /// Build a start event with a single `class` attribute.
    #[must_use]
    pub fn start_with_class(tag: &str, class: &str) -> Self {
        Self::Start {
            tag: tag.to_string(),
            attrs: vec![("class".to_string(), class.to_string())],
        }
    }

    #[must_use]
    pub fn end(tag: &str) -> Self {
        Self::End {
            tag: tag.to_string(),
        }
    }

    #[must_use]
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Look up an attribute value by name.
#[must_use]
pub fn find_attribute<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get all attributes as key-value pairs
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

enum Step<'a> {
    Enter(NodeRef<'a>),
    Leave(String),
}

/// Walk `doc` depth-first and hand every event to `sink`.
///
/// Uses an explicit stack so deeply nested markup cannot overflow the call
/// stack. Comments, doctypes and processing instructions produce no events.
pub fn walk<F>(doc: &Document, mut sink: F)
where
    F: FnMut(HtmlEvent),
{
    let mut stack: Vec<Step> = doc.root().children().into_iter().rev().map(Step::Enter).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Leave(tag) => sink(HtmlEvent::End { tag }),
            Step::Enter(node) if node.is_element() => {
                let Some(tag) = tag_name(&node) else {
                    continue;
                };
                sink(HtmlEvent::Start {
                    tag: tag.clone(),
                    attrs: get_all_attributes(&node),
                });
                stack.push(Step::Leave(tag));
                stack.extend(node.children().into_iter().rev().map(Step::Enter));
            }
            Step::Enter(node) if node.is_text() => {
                let text = node.text();
                if !text.is_empty() {
                    sink(HtmlEvent::Text(text.to_string()));
                }
            }
            Step::Enter(_) => {}
        }
    }
}

/// Parse `html` and collect its event stream.
#[must_use]
pub fn events(html: &str) -> Vec<HtmlEvent> {
    let doc = parse(html);
    let mut out = Vec::new();
    walk(&doc, |event| out.push(event));
    out
}
