//! Compiled regex patterns for content cleanup and fallback extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Tag patterns match exact tag names: `<p>` never matches `<pre>`, `<b>`
//! never matches `<br>` or `<body>`, `<i>` never matches `<img>`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Runs of one or more newlines.
pub static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("NEWLINE_RUN regex"));

/// Runs of literal spaces (tabs and newlines untouched).
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("SPACE_RUN regex"));

/// Runs of any whitespace.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// A line that starts like a rendered list item: `- ` or a digit followed by `)`.
pub static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:- |\d\))").expect("LIST_LINE regex"));

// =============================================================================
// Fallback Extraction Patterns
// =============================================================================

/// `<script>` regions, spanning newlines.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script(?:\s[^>]*)?>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// `<style>` regions, spanning newlines.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style(?:\s[^>]*)?>.*?</style\s*>").expect("STYLE_BLOCK regex")
});

/// `<footer>` and `</footer>` tags; group 1 is the closing slash.
pub static FOOTER_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)footer(?:\s[^>]*)?>").expect("FOOTER_TAG regex")
});

/// Any remaining tag.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex"));

/// Build the pattern capturing the inner markup of every `<tag>...</tag>`.
fn element_body(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>"))
        .expect("element body regex")
}

/// Inner markup of `<p>` elements.
pub static PARAGRAPH_BODY: LazyLock<Regex> = LazyLock::new(|| element_body("p"));

/// Inner markup of `<ul>` elements.
pub static UNORDERED_LIST_BODY: LazyLock<Regex> = LazyLock::new(|| element_body("ul"));

/// Inner markup of `<ol>` elements.
pub static ORDERED_LIST_BODY: LazyLock<Regex> = LazyLock::new(|| element_body("ol"));

/// Inner markup of `<li>` elements.
pub static LIST_ITEM_BODY: LazyLock<Regex> = LazyLock::new(|| element_body("li"));

/// Inner markup of `<h2>` through `<h6>`, keyed by level.
pub static HEADING_BODIES: LazyLock<Vec<(u8, Regex)>> = LazyLock::new(|| {
    (2..=6u8)
        .map(|level| (level, element_body(&format!("h{level}"))))
        .collect()
});

/// Substitutions turning one emphasis tag into markdown delimiters.
///
/// A delimiter touching a non-space character gets one space of padding;
/// one touching whitespace (or the string edge) does not.
pub struct EmphasisRewrite {
    /// `x<em>` -> `x *`
    pub open_tight: Regex,
    /// `</em>x` -> `* x`
    pub close_tight: Regex,
    /// ` <em>` -> ` *`
    pub open_loose: Regex,
    /// `</em> ` -> `* `
    pub close_loose: Regex,
    pub delimiter: &'static str,
}

impl EmphasisRewrite {
    fn new(tag: &str, delimiter: &'static str) -> Self {
        let open = format!(r"<{tag}(?:\s[^>]*)?>");
        let close = format!(r"</{tag}\s*>");
        Self {
            open_tight: Regex::new(&format!(r"(?i)(\S){open}")).expect("open_tight regex"),
            close_tight: Regex::new(&format!(r"(?i){close}(\S)")).expect("close_tight regex"),
            open_loose: Regex::new(&format!(r"(?i)(^|\s){open}")).expect("open_loose regex"),
            close_loose: Regex::new(&format!(r"(?i){close}(\s|$)")).expect("close_loose regex"),
            delimiter,
        }
    }

    /// Apply open/close substitutions, tight before loose.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let d = self.delimiter;
        let text = self.open_tight.replace_all(text, format!("${{1}} {d}").as_str());
        let text = self.close_tight.replace_all(&text, format!("{d} ${{1}}").as_str());
        let text = self.open_loose.replace_all(&text, format!("${{1}}{d}").as_str());
        let text = self.close_loose.replace_all(&text, format!("{d}${{1}}").as_str());
        text.into_owned()
    }
}

/// Emphasis rewrites in application order: italic family, then bold family.
pub static EMPHASIS_REWRITES: LazyLock<[EmphasisRewrite; 4]> = LazyLock::new(|| {
    [
        EmphasisRewrite::new("em", "*"),
        EmphasisRewrite::new("i", "*"),
        EmphasisRewrite::new("strong", "**"),
        EmphasisRewrite::new("b", "**"),
    ]
});

/// Entities decoded by the fallback, in decoding order.
pub static FALLBACK_ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];
