//! Configuration options for article conversion.
//!
//! The `Options` struct controls how a single document is turned into an
//! [`ArticleRecord`](crate::ArticleRecord). Retrieval settings live in
//! [`HarvestConfig`](crate::harvest::HarvestConfig).

/// Block ordering used by the regex fallback extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackOrder {
    /// Paragraphs, then h2 through h6, then unordered lists, then ordered lists.
    #[default]
    Grouped,

    /// Blocks sorted by the position of their match in the source markup.
    Document,
}

/// Configuration options for article conversion.
///
/// # Example
///
/// ```rust
/// use article_harvest::{FallbackOrder, Options};
///
/// let options = Options {
///     fallback_order: FallbackOrder::Document,
///     ..Options::default()
/// };
/// assert!(options.use_fallback);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Run the regex fallback extractor when the converter yields no content.
    ///
    /// Default: `true`
    pub use_fallback: bool,

    /// Emission order of fallback blocks.
    ///
    /// Default: [`FallbackOrder::Grouped`]
    pub fallback_order: FallbackOrder,

    /// `class` attribute value marking the byline paragraph.
    ///
    /// Default: `"author"`
    pub author_class: String,

    /// Prefix stripped from the byline, compared case-insensitively.
    ///
    /// Default: `"by "`
    pub author_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_fallback: true,
            fallback_order: FallbackOrder::Grouped,
            author_class: "author".to_string(),
            author_prefix: "by ".to_string(),
        }
    }
}

impl Options {
    /// Strip the configured byline prefix from `text`, if present.
    ///
    /// ```rust
    /// use article_harvest::Options;
    ///
    /// let opts = Options::default();
    /// assert_eq!(opts.strip_author_prefix("By Jane Doe"), "Jane Doe");
    /// assert_eq!(opts.strip_author_prefix("Jane Doe"), "Jane Doe");
    /// ```
    #[must_use]
    pub fn strip_author_prefix<'a>(&self, text: &'a str) -> &'a str {
        let prefix_len = self.author_prefix.len();
        match text.get(..prefix_len) {
            Some(head) if prefix_len > 0 && head.eq_ignore_ascii_case(&self.author_prefix) => {
                text[prefix_len..].trim()
            }
            _ => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.use_fallback);
        assert_eq!(opts.fallback_order, FallbackOrder::Grouped);
        assert_eq!(opts.author_class, "author");
        assert_eq!(opts.author_prefix, "by ");
    }

    #[test]
    fn test_strip_author_prefix_case_insensitive() {
        let opts = Options::default();

        assert_eq!(opts.strip_author_prefix("BY Jane Doe"), "Jane Doe");
        assert_eq!(opts.strip_author_prefix("by   Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_strip_author_prefix_requires_full_prefix() {
        let opts = Options::default();

        // "Byron" starts with "By" but not with "by "
        assert_eq!(opts.strip_author_prefix("Byron Smith"), "Byron Smith");
        assert_eq!(opts.strip_author_prefix("By"), "By");
    }

    #[test]
    fn test_strip_author_prefix_multibyte_text() {
        let opts = Options::default();

        // Prefix boundary falls inside a multi-byte char; must not panic
        assert_eq!(opts.strip_author_prefix("Bé Doe"), "Bé Doe");
        assert_eq!(opts.strip_author_prefix("Zoë"), "Zoë");
    }

    #[test]
    fn test_custom_author_prefix() {
        let opts = Options {
            author_prefix: "written by ".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.strip_author_prefix("Written by Ann"), "Ann");
        assert_eq!(opts.strip_author_prefix("By Ann"), "By Ann");
    }
}
