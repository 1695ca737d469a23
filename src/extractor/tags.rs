//! Tag classification for the tag-state converter.
//!
//! Only a fixed subset of HTML matters; every other tag maps to
//! [`TagKind::Other`] and is ignored by the state machine.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Heading tags: h1-h6
pub static HEAD_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List tags: ul, ol, dl
pub static LIST_TAGS: [&str; 3] = ["ul", "ol", "dl"];

/// Item tags: li, dt, dd
pub static ITEM_TAGS: [&str; 3] = ["li", "dt", "dd"];

/// Italic family: em, i
pub static ITALIC_TAGS: [&str; 2] = ["em", "i"];

/// Bold family: strong, b
pub static BOLD_TAGS: [&str; 2] = ["strong", "b"];

/// Every tag the converter reacts to.
pub static RECOGNIZED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HEAD_TAGS
        .into_iter()
        .chain(LIST_TAGS)
        .chain(ITEM_TAGS)
        .chain(ITALIC_TAGS)
        .chain(BOLD_TAGS)
        .chain(["p", "article", "footer"])
        .collect()
});

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Inline emphasis family. Two spellings map onto each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Italic,
    Bold,
}

impl Emphasis {
    /// Markdown delimiter for this emphasis.
    #[must_use]
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Italic => "*",
            Self::Bold => "**",
        }
    }
}

/// Role of a tag in the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// h1-h6, carrying the level.
    Heading(u8),
    Paragraph,
    List(ListKind),
    ListItem,
    DefinitionList,
    DefinitionTerm,
    DefinitionBody,
    Emphasis(Emphasis),
    Article,
    Footer,
    Other,
}

impl TagKind {
    /// Classify a tag name. Matching is case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "ul" => Self::List(ListKind::Unordered),
            "ol" => Self::List(ListKind::Ordered),
            "li" => Self::ListItem,
            "dl" => Self::DefinitionList,
            "dt" => Self::DefinitionTerm,
            "dd" => Self::DefinitionBody,
            "em" | "i" => Self::Emphasis(Emphasis::Italic),
            "strong" | "b" => Self::Emphasis(Emphasis::Bold),
            "article" => Self::Article,
            "footer" => Self::Footer,
            _ => Self::Other,
        }
    }
}

/// Check if tag is recognized by the converter, ignoring case
#[inline]
#[must_use]
pub fn is_recognized_tag(tag: &str) -> bool {
    RECOGNIZED_TAG_SET.contains(tag.to_ascii_lowercase().as_str())
}
