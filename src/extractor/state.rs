//! Per-document conversion state.
//!
//! `ParseState` is the single state object of the tag-state converter: a set
//! of named "inside tag X" flags, footer and list item depth counters, a
//! stack of open lists, the scratch text buffer and the finalized blocks. It is created
//! fresh for each document and consumed by [`ParseState::finish`].

use crate::markdown::ContentBlock;

use super::tags::{Emphasis, ListKind, TagKind};

/// Open list on the list stack.
#[derive(Debug, Clone)]
pub(crate) struct ListFrame {
    pub(crate) kind: ListKind,
    /// 1-based counter of emitted ordered items.
    pub(crate) counter: usize,
    /// Line in `list_lines` already emitted for the open item, if any.
    pub(crate) item_line: Option<usize>,
}

impl ListFrame {
    pub(crate) fn new(kind: ListKind) -> Self {
        Self {
            kind,
            counter: 0,
            item_line: None,
        }
    }
}

/// Which heading is currently collecting title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TitleCapture {
    Primary,
    Secondary,
}

/// Level-2 heading provisionally used as title.
#[derive(Debug, Clone)]
pub(crate) struct ProvisionalTitle {
    /// Position in `blocks` the heading would have occupied.
    pub(crate) index: usize,
    pub(crate) text: String,
}

/// Named "currently inside" flags.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct Flags {
    /// h1..h6, index 0 is h1.
    pub(crate) headings: [bool; 6],
    pub(crate) paragraph: bool,
    pub(crate) author_paragraph: bool,
    pub(crate) definition_list: bool,
    pub(crate) definition_term: bool,
    pub(crate) definition_body: bool,
    pub(crate) italic: bool,
    pub(crate) bold: bool,
    pub(crate) article: bool,
}

/// Output of one converter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converted {
    pub title: String,
    pub author: String,
    pub blocks: Vec<ContentBlock>,
}

/// Mutable conversion state for one document.
#[derive(Debug, Default)]
pub struct ParseState {
    pub(crate) flags: Flags,
    pub(crate) footer_depth: usize,
    /// Open list items, nested ones included.
    pub(crate) item_depth: usize,
    pub(crate) lists: Vec<ListFrame>,
    /// Rendered lines of the outermost open list, nested lists included.
    pub(crate) list_lines: Vec<String>,
    pub(crate) current_text: String,
    pub(crate) blocks: Vec<ContentBlock>,

    pub(crate) title: String,
    pub(crate) title_from_h1: bool,
    pub(crate) provisional_title: Option<ProvisionalTitle>,
    pub(crate) title_capture: Option<TitleCapture>,
    pub(crate) title_buffer: String,

    pub(crate) author: String,
    pub(crate) author_buffer: String,
}

impl ParseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any enclosing footer is open.
    #[inline]
    #[must_use]
    pub fn in_footer(&self) -> bool {
        self.footer_depth > 0
    }

    /// True while any list item is open.
    #[inline]
    #[must_use]
    pub fn in_list_item(&self) -> bool {
        self.item_depth > 0
    }

    #[inline]
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    #[inline]
    pub(crate) fn in_heading(&self, level: u8) -> bool {
        (1..=6).contains(&level) && self.flags.headings[usize::from(level) - 1]
    }

    pub(crate) fn set_heading(&mut self, level: u8, value: bool) {
        if (1..=6).contains(&level) {
            self.flags.headings[usize::from(level) - 1] = value;
        }
    }

    /// True if the innermost open context of `kind` is active.
    #[must_use]
    pub fn is_inside(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Heading(level) => self.in_heading(level),
            TagKind::Paragraph => self.flags.paragraph,
            TagKind::List(kind) => self.lists.iter().any(|frame| frame.kind == kind),
            TagKind::ListItem => self.in_list_item(),
            TagKind::DefinitionList => self.flags.definition_list,
            TagKind::DefinitionTerm => self.flags.definition_term,
            TagKind::DefinitionBody => self.flags.definition_body,
            TagKind::Emphasis(Emphasis::Italic) => self.flags.italic,
            TagKind::Emphasis(Emphasis::Bold) => self.flags.bold,
            TagKind::Article => self.flags.article,
            TagKind::Footer => self.in_footer(),
            TagKind::Other => false,
        }
    }

    /// True if a level-2 heading is open and renders as content.
    pub(crate) fn in_content_h2(&self) -> bool {
        self.in_heading(2) && self.has_title() && self.title_capture.is_none()
    }

    /// True if the scratch buffer belongs to a block that will be rendered.
    ///
    /// Paragraphs (except the byline), list items, definition terms and
    /// bodies, level-2 headings once a title exists, and levels 3-6.
    pub(crate) fn in_rendered_block(&self) -> bool {
        if self.in_footer() || self.flags.author_paragraph {
            return false;
        }
        self.flags.paragraph
            || self.in_list_item()
            || self.flags.definition_term
            || self.flags.definition_body
            || self.in_content_h2()
            || (3..=6).any(|level| self.in_heading(level))
    }

    /// True if the open block already owns the buffer through an item tag.
    pub(crate) fn in_item(&self) -> bool {
        self.in_list_item() || self.flags.definition_term || self.flags.definition_body
    }

    /// Take the trimmed scratch buffer, leaving it empty.
    pub(crate) fn take_text(&mut self) -> String {
        let text = self.current_text.trim().to_string();
        self.current_text.clear();
        text
    }

    pub(crate) fn push_block(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Open a list item under the innermost list.
    pub(crate) fn begin_item(&mut self) {
        self.item_depth += 1;
        self.current_text.clear();
        if let Some(frame) = self.lists.last_mut() {
            frame.item_line = None;
        }
    }

    /// Record one list item under the innermost open list.
    ///
    /// Items of nested lists are flattened into the outermost list's block.
    /// A stray item with no open list becomes its own unordered block.
    /// Line breaks inside the item are folded so it stays on one line.
    pub(crate) fn push_list_item(&mut self, text: &str) {
        let text = single_line(text);
        if text.is_empty() {
            return;
        }
        match self.lists.last_mut() {
            Some(frame) => {
                let line = match frame.kind {
                    ListKind::Unordered => format!("- {text}"),
                    ListKind::Ordered => {
                        frame.counter += 1;
                        format!("{}) {text}", frame.counter)
                    }
                };
                frame.item_line = Some(self.list_lines.len());
                self.list_lines.push(line);
            }
            None => self.push_block(ContentBlock::List(vec![format!("- {text}")])),
        }
    }

    /// Emit text of the open item.
    ///
    /// The first piece becomes the item's line. Text that follows a nested
    /// list is appended to that same line instead of starting a new item.
    pub(crate) fn emit_item_text(&mut self, text: &str) {
        let existing = self.lists.last().and_then(|frame| frame.item_line);
        match existing {
            Some(index) => {
                let text = single_line(text);
                match self.list_lines.get_mut(index) {
                    Some(line) if !text.is_empty() => {
                        line.push(' ');
                        line.push_str(&text);
                    }
                    _ => {}
                }
            }
            None => self.push_list_item(text),
        }
    }

    /// Close the innermost list; the outermost emits the collected lines.
    pub(crate) fn close_list(&mut self) {
        if self.lists.pop().is_some() && self.lists.is_empty() && !self.list_lines.is_empty() {
            let lines = std::mem::take(&mut self.list_lines);
            self.push_block(ContentBlock::List(lines));
        }
    }

    /// Emit whatever the scratch buffer holds using the rule of the innermost
    /// open block. Used before a footer masks the rest of the block.
    pub(crate) fn flush_pending(&mut self) {
        let text = self.take_text();
        if text.is_empty() {
            return;
        }
        if self.in_list_item() {
            self.emit_item_text(&text);
        } else if self.flags.definition_term {
            self.push_block(ContentBlock::DefinitionTerm(text));
        } else if self.flags.definition_body {
            self.push_block(ContentBlock::DefinitionBody(text));
        } else if self.flags.paragraph && !self.flags.author_paragraph {
            self.push_block(ContentBlock::Paragraph(text));
        } else if self.in_content_h2() || (3..=6).any(|level| self.in_heading(level)) {
            self.push_block(ContentBlock::Heading(text));
        }
    }

    /// Finalize the heading that was collecting title text.
    ///
    /// A level-1 heading always wins over a level-2 heading taken earlier;
    /// the displaced level-2 text is restored as a bold block at its
    /// original position.
    pub(crate) fn finish_title(&mut self, capture: TitleCapture) {
        let text = self.title_buffer.trim().to_string();
        self.title_buffer.clear();
        self.title_capture = None;
        if text.is_empty() {
            return;
        }

        match capture {
            TitleCapture::Primary => {
                if let Some(previous) = self.provisional_title.take() {
                    let index = previous.index.min(self.blocks.len());
                    self.blocks.insert(index, ContentBlock::Heading(previous.text));
                }
                self.title = text;
                self.title_from_h1 = true;
            }
            TitleCapture::Secondary => {
                self.provisional_title = Some(ProvisionalTitle {
                    index: self.blocks.len(),
                    text: text.clone(),
                });
                self.title = text;
            }
        }
    }

    /// Finalize the byline paragraph. The first non-empty byline wins.
    pub(crate) fn finish_author(&mut self, prefix_stripper: impl Fn(&str) -> String) {
        let raw = std::mem::take(&mut self.author_buffer);
        let text = raw.trim();
        if text.is_empty() || !self.author.is_empty() {
            return;
        }
        self.author = prefix_stripper(text);
    }

    /// Consume the state, flushing any list left open by truncated markup.
    #[must_use]
    pub fn finish(mut self) -> Converted {
        while !self.lists.is_empty() {
            self.close_list();
        }
        Converted {
            title: self.title,
            author: self.author,
            blocks: self.blocks,
        }
    }
}

/// Join the lines of `text`, trimmed, with single spaces.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
