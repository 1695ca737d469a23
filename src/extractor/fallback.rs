//! Fallback Extraction
//!
//! Pattern-based extraction used when the tag-state converter yields no
//! content. It works on the raw markup, so it still recovers paragraphs from
//! documents whose structure the converter could not follow.
//!
//! Footer regions are masked here too, nested ones included, so footer text
//! never reaches the content on either path.
//!
//! Blocks are collected per kind: paragraphs, then headings level 2 to 6
//! (the first level-2 heading is skipped as the likely title duplicate),
//! then unordered and ordered lists. With [`FallbackOrder::Document`] the
//! collected blocks are re-sorted by their position in the source.

use regex::Regex;

use crate::markdown::join_blocks;
use crate::options::FallbackOrder;
use crate::patterns::{
    ANY_TAG, EMPHASIS_REWRITES, FALLBACK_ENTITIES, FOOTER_TAG, HEADING_BODIES, LIST_ITEM_BODY,
    ORDERED_LIST_BODY, PARAGRAPH_BODY, SCRIPT_BLOCK, STYLE_BLOCK, UNORDERED_LIST_BODY,
    WHITESPACE_RUN,
};
use crate::Options;

use super::tags::ListKind;

/// One block found by the fallback, tagged with its source offset.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FallbackBlock {
    offset: usize,
    text: String,
}

/// Extract content from raw HTML without an event stream.
///
/// Returns the blocks joined by a blank line, or an empty string when
/// nothing could be recovered.
///
/// ```rust
/// use article_harvest::extractor::fallback::extract_text_fallback;
/// use article_harvest::Options;
///
/// let html = "<p>Hello <em>there</em> friend.</p><ul><li>a</li><li>b</li></ul>";
/// assert_eq!(
///     extract_text_fallback(html, &Options::default()),
///     "Hello *there* friend.\n\n- a\n- b"
/// );
/// ```
#[must_use]
pub fn extract_text_fallback(html: &str, opts: &Options) -> String {
    let html = strip_footers(&strip_scripts_and_styles(html));

    let mut blocks = Vec::new();
    collect_paragraphs(&html, &mut blocks);
    collect_headings(&html, &mut blocks);
    collect_lists(&html, &UNORDERED_LIST_BODY, ListKind::Unordered, &mut blocks);
    collect_lists(&html, &ORDERED_LIST_BODY, ListKind::Ordered, &mut blocks);

    if opts.fallback_order == FallbackOrder::Document {
        blocks.sort_by_key(|block| block.offset);
    }

    join_blocks(blocks.into_iter().map(|block| block.text))
}

/// Remove `<script>` and `<style>` regions.
fn strip_scripts_and_styles(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
    STYLE_BLOCK.replace_all(&without_scripts, "").into_owned()
}

/// Remove footer regions by tracking footer tag depth.
///
/// An unclosed footer masks the rest of the document; a stray closing tag
/// is left for the tag stripper.
fn strip_footers(html: &str) -> String {
    let mut kept = String::with_capacity(html.len());
    let mut depth = 0usize;
    let mut cursor = 0;

    for caps in FOOTER_TAG.captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        let closing = caps.get(1).is_some_and(|slash| !slash.as_str().is_empty());
        if closing {
            if depth == 0 {
                continue;
            }
            depth -= 1;
            if depth == 0 {
                cursor = tag.end();
            }
        } else {
            if depth == 0 {
                kept.push_str(&html[cursor..tag.start()]);
            }
            depth += 1;
        }
    }

    if depth == 0 {
        kept.push_str(&html[cursor..]);
    }
    kept
}

/// Turn emphasis tags into delimiters, drop remaining tags, decode entities.
#[must_use]
pub fn clean_markup(content: &str) -> String {
    let mut text = content.to_string();
    for rewrite in EMPHASIS_REWRITES.iter() {
        text = rewrite.apply(&text);
    }
    let mut text = ANY_TAG.replace_all(&text, "").into_owned();
    for (entity, replacement) in FALLBACK_ENTITIES {
        text = text.replace(entity, replacement);
    }
    text
}

/// Clean markup and collapse every whitespace run to one space.
fn clean_inline(content: &str) -> String {
    let text = clean_markup(content);
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

fn collect_paragraphs(html: &str, blocks: &mut Vec<FallbackBlock>) {
    for caps in PARAGRAPH_BODY.captures_iter(html) {
        let Some(body) = caps.get(1) else { continue };
        let text = clean_inline(body.as_str());
        if !text.is_empty() {
            blocks.push(FallbackBlock {
                offset: body.start(),
                text,
            });
        }
    }
}

fn collect_headings(html: &str, blocks: &mut Vec<FallbackBlock>) {
    for (level, pattern) in HEADING_BODIES.iter() {
        let skip = usize::from(*level == 2);
        for caps in pattern.captures_iter(html).skip(skip) {
            let Some(body) = caps.get(1) else { continue };
            let text = clean_inline(body.as_str());
            if !text.is_empty() {
                blocks.push(FallbackBlock {
                    offset: body.start(),
                    text: format!("**{text}**"),
                });
            }
        }
    }
}

fn collect_lists(html: &str, pattern: &Regex, kind: ListKind, blocks: &mut Vec<FallbackBlock>) {
    for caps in pattern.captures_iter(html) {
        let Some(body) = caps.get(1) else { continue };
        let lines: Vec<String> = LIST_ITEM_BODY
            .captures_iter(body.as_str())
            .enumerate()
            .filter_map(|(idx, item)| {
                let text = clean_inline(item.get(1)?.as_str());
                if text.is_empty() {
                    return None;
                }
                // numbering follows item position, empty items included
                Some(match kind {
                    ListKind::Unordered => format!("- {text}"),
                    ListKind::Ordered => format!("{}) {text}", idx + 1),
                })
            })
            .collect();
        if !lines.is_empty() {
            blocks.push(FallbackBlock {
                offset: body.start(),
                text: lines.join("\n"),
            });
        }
    }
}
