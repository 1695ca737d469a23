//! Content blocks and markdown-flavored text assembly.
//!
//! Blocks are rendered to text, normalized one by one, joined with blank
//! lines and then passed through an emphasis cleanup that removes stray
//! whitespace just inside `*` / `**` delimiters.

use std::fmt;

use regex::Captures;

use crate::patterns::{LIST_LINE, NEWLINE_RUN, SPACE_RUN};

/// Separator placed between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// One finalized unit of article content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Plain paragraph text.
    Paragraph(String),

    /// Heading rendered as a bold line.
    Heading(String),

    /// Rendered list lines, each already prefixed with `- ` or `N) `.
    List(Vec<String>),

    /// Definition term rendered as a bold line.
    DefinitionTerm(String),

    /// Definition body rendered as plain text.
    DefinitionBody(String),
}

impl ContentBlock {
    /// Render the block as markdown-flavored text.
    ///
    /// ```rust
    /// use article_harvest::markdown::ContentBlock;
    ///
    /// assert_eq!(ContentBlock::Heading("Intro".into()).render(), "**Intro**");
    /// assert_eq!(
    ///     ContentBlock::List(vec!["- a".into(), "- b".into()]).render(),
    ///     "- a\n- b"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Paragraph(text) | Self::DefinitionBody(text) => text.clone(),
            Self::Heading(text) | Self::DefinitionTerm(text) => format!("**{text}**"),
            Self::List(lines) => lines.join("\n"),
        }
    }
}

impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// True if any line of `text` starts like a list item.
#[inline]
#[must_use]
pub fn looks_like_list(text: &str) -> bool {
    LIST_LINE.is_match(text)
}

/// Replace each lone newline with a space; runs of two or more stay.
#[must_use]
pub fn collapse_single_newlines(text: &str) -> String {
    NEWLINE_RUN
        .replace_all(text, |caps: &Captures| {
            if caps[0].len() == 1 {
                " ".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Normalize one rendered block.
///
/// List blocks keep one line per item with space runs collapsed inside each
/// line. Other blocks are unwrapped (lone newlines become spaces), space runs
/// collapse to one and the result is trimmed.
#[must_use]
pub fn normalize_block(text: &str) -> String {
    if looks_like_list(text) {
        text.lines()
            .map(|line| SPACE_RUN.replace_all(line.trim(), " ").into_owned())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let unwrapped = collapse_single_newlines(text);
        SPACE_RUN.replace_all(&unwrapped, " ").trim().to_string()
    }
}

/// Characters that may directly follow a closing delimiter.
const CLOSING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

/// Remove whitespace just inside emphasis delimiters.
///
/// `* text *` becomes `*text*` and `** text **` becomes `**text**`.
/// Delimiters are paired per line (`*` and `**` tracked separately) so the
/// closing delimiter of one span is never mistaken for the opening delimiter
/// of the next. An opening delimiter loses the whitespace after it when it
/// sits at line start or after whitespace; a closing delimiter loses the
/// whitespace before it when it is followed by whitespace, closing
/// punctuation or the end of the line. A spaced delimiter that could either
/// close the open span or open a new one is read as an opener when enough
/// delimiters follow on the line to close it, so a literal `*` earlier on the
/// line does not swallow a real span. Applying it to already-clean text
/// changes nothing.
///
/// ```rust
/// use article_harvest::markdown::cleanup_emphasis;
///
/// assert_eq!(cleanup_emphasis("hello * world*!"), "hello *world*!");
/// assert_eq!(cleanup_emphasis("a ** bold ** b"), "a **bold** b");
/// ```
#[must_use]
pub fn cleanup_emphasis(content: &str) -> String {
    content
        .split('\n')
        .map(cleanup_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One run of `*` characters: `[start, end)` and its slot (0 italic, 1 bold).
#[derive(Debug, Clone, Copy)]
struct DelimiterRun {
    start: usize,
    end: usize,
    slot: usize,
}

/// Runs of one or two asterisks; longer runs are left alone.
fn delimiter_runs(chars: &[char]) -> Vec<DelimiterRun> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '*' {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i] == '*' {
            i += 1;
        }
        match i - start {
            1 => runs.push(DelimiterRun { start, end: i, slot: 0 }),
            2 => runs.push(DelimiterRun { start, end: i, slot: 1 }),
            _ => {}
        }
    }
    runs
}

/// Mark the whitespace after an opening delimiter, unless only whitespace or
/// another delimiter follows it.
fn strip_after(chars: &[char], strip: &mut [bool], end: usize) {
    let mut j = end;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j > end && j < chars.len() && chars[j] != '*' {
        strip[end..j].fill(true);
    }
}

/// Mark the whitespace before a closing delimiter, unless only whitespace or
/// another delimiter precedes it.
fn strip_before(chars: &[char], strip: &mut [bool], start: usize) {
    let mut j = start;
    while j > 0 && chars[j - 1].is_whitespace() {
        j -= 1;
    }
    if j < start && j > 0 && chars[j - 1] != '*' {
        strip[j..start].fill(true);
    }
}

fn cleanup_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let runs = delimiter_runs(&chars);
    let mut strip = vec![false; chars.len()];
    // [italic, bold]
    let mut open = [false; 2];

    for (idx, run) in runs.iter().enumerate() {
        let DelimiterRun { start, end, slot } = *run;
        let after_space = start == 0 || chars[start - 1].is_whitespace();
        let before_space = end < chars.len() && chars[end].is_whitespace();

        if !open[slot] {
            if after_space && before_space {
                strip_after(&chars, &mut strip, end);
            }
            open[slot] = true;
            continue;
        }

        // A spaced run could open a new span instead of closing this one.
        // It opens when the rest of the line holds an odd number of runs of
        // the same width to pair with, leaving the earlier run unmatched.
        let later = runs[idx + 1..].iter().filter(|r| r.slot == slot).count();
        let starts_word = chars[end..]
            .iter()
            .find(|c| !c.is_whitespace())
            .is_some_and(|c| *c != '*' && !CLOSING_PUNCTUATION.contains(c));
        if after_space && before_space && starts_word && later % 2 == 1 {
            strip_after(&chars, &mut strip, end);
            continue;
        }

        let closes = end == chars.len()
            || chars[end].is_whitespace()
            || CLOSING_PUNCTUATION.contains(&chars[end]);
        if start > 0 && chars[start - 1].is_whitespace() && closes {
            strip_before(&chars, &mut strip, start);
        }
        open[slot] = false;
    }

    chars
        .into_iter()
        .zip(strip)
        .filter_map(|(c, stripped)| (!stripped).then_some(c))
        .collect()
}

/// Join non-empty rendered blocks with a blank line.
#[must_use]
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = blocks
        .into_iter()
        .filter(|b| !b.as_ref().is_empty())
        .collect();
    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    parts.join(BLOCK_SEPARATOR)
}

/// Assemble the final content string from converter blocks.
#[must_use]
pub fn get_content(blocks: &[ContentBlock]) -> String {
    let normalized = blocks.iter().map(|block| normalize_block(&block.render()));
    cleanup_emphasis(&join_blocks(normalized))
}
