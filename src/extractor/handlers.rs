//! Event handlers of the tag-state converter.
//!
//! Each handler applies one transition to a [`ParseState`]. Unknown tags and
//! closers without a matching opener are ignored, so malformed markup never
//! raises; the converter simply keeps whatever blocks were flushed.

use crate::dom::{find_attribute, HtmlEvent};
use crate::markdown::ContentBlock;
use crate::Options;

use super::state::{ListFrame, ParseState, TitleCapture};
use super::tags::{is_recognized_tag, Emphasis, TagKind};

/// Characters after which no space is inserted following a closing delimiter.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Dispatch one parse event.
pub fn handle_event(state: &mut ParseState, event: &HtmlEvent, opts: &Options) {
    match event {
        HtmlEvent::Start { tag, attrs } => handle_start(state, tag, attrs, opts),
        HtmlEvent::End { tag } => handle_end(state, tag, opts),
        HtmlEvent::Text(text) => handle_text(state, text),
    }
}

/// Handle an opening tag.
pub fn handle_start(
    state: &mut ParseState,
    tag: &str,
    attrs: &[(String, String)],
    opts: &Options,
) {
    if !is_recognized_tag(tag) {
        return;
    }

    match TagKind::from_name(tag) {
        TagKind::Heading(level) => {
            state.set_heading(level, true);
            if state.in_footer() || state.title_capture.is_some() {
                return;
            }
            if level == 1 && !state.title_from_h1 {
                state.title_capture = Some(TitleCapture::Primary);
                state.title_buffer.clear();
            } else if level == 2 && !state.has_title() {
                state.title_capture = Some(TitleCapture::Secondary);
                state.title_buffer.clear();
            }
        }
        TagKind::Paragraph => {
            state.flags.paragraph = true;
            if find_attribute(attrs, "class") == Some(opts.author_class.as_str()) {
                state.flags.author_paragraph = true;
                state.author_buffer.clear();
            }
        }
        TagKind::Footer => {
            state.flush_pending();
            state.footer_depth += 1;
        }
        TagKind::List(kind) => {
            if state.in_list_item() {
                // text before a nested list is an item of the parent list
                let pending = state.take_text();
                if !state.in_footer() {
                    state.emit_item_text(&pending);
                }
            }
            state.lists.push(ListFrame::new(kind));
        }
        TagKind::ListItem => state.begin_item(),
        TagKind::DefinitionList => state.flags.definition_list = true,
        TagKind::DefinitionTerm => {
            state.flags.definition_term = true;
            state.current_text.clear();
        }
        TagKind::DefinitionBody => {
            state.flags.definition_body = true;
            state.current_text.clear();
        }
        TagKind::Emphasis(emphasis) => {
            if emphasis_renders(state, emphasis) {
                if state
                    .current_text
                    .chars()
                    .last()
                    .is_some_and(|c| !c.is_whitespace())
                {
                    state.current_text.push(' ');
                }
                state.current_text.push_str(emphasis.delimiter());
            }
            set_emphasis(state, emphasis, true);
        }
        TagKind::Article => state.flags.article = true,
        TagKind::Other => {}
    }
}

/// Handle a closing tag.
pub fn handle_end(state: &mut ParseState, tag: &str, opts: &Options) {
    if !is_recognized_tag(tag) {
        return;
    }

    match TagKind::from_name(tag) {
        TagKind::Heading(level) => {
            if !state.in_heading(level) {
                return;
            }
            let capturing = match (level, state.title_capture) {
                (1, Some(TitleCapture::Primary)) => Some(TitleCapture::Primary),
                (2, Some(TitleCapture::Secondary)) => Some(TitleCapture::Secondary),
                _ => None,
            };
            if let Some(capture) = capturing {
                state.set_heading(level, false);
                state.finish_title(capture);
                return;
            }

            let renders = level >= 3 || (level == 2 && state.in_content_h2());
            state.set_heading(level, false);
            if renders {
                let text = state.take_text();
                if !text.is_empty() && !state.in_footer() {
                    state.push_block(ContentBlock::Heading(text));
                }
            }
        }
        TagKind::Paragraph => {
            if !state.flags.paragraph {
                return;
            }
            let author_paragraph = state.flags.author_paragraph;
            state.flags.paragraph = false;
            state.flags.author_paragraph = false;

            if author_paragraph {
                state.finish_author(|text| opts.strip_author_prefix(text).to_string());
            } else if state.in_item() {
                // the enclosing item owns the text; keep paragraphs apart
                state.current_text.push(' ');
            } else {
                let text = state.take_text();
                if !text.is_empty() && !state.in_footer() {
                    state.push_block(ContentBlock::Paragraph(text));
                }
            }
        }
        TagKind::Footer => {
            state.footer_depth = state.footer_depth.saturating_sub(1);
        }
        TagKind::List(_) => state.close_list(),
        TagKind::ListItem => {
            if !state.in_list_item() {
                return;
            }
            state.item_depth -= 1;
            let text = state.take_text();
            if !state.in_footer() {
                state.emit_item_text(&text);
            }
        }
        TagKind::DefinitionList => state.flags.definition_list = false,
        TagKind::DefinitionTerm => {
            if !state.flags.definition_term {
                return;
            }
            state.flags.definition_term = false;
            let text = state.take_text();
            if !text.is_empty() && !state.in_footer() {
                state.push_block(ContentBlock::DefinitionTerm(text));
            }
        }
        TagKind::DefinitionBody => {
            if !state.flags.definition_body {
                return;
            }
            state.flags.definition_body = false;
            let text = state.take_text();
            if !text.is_empty() && !state.in_footer() {
                state.push_block(ContentBlock::DefinitionBody(text));
            }
        }
        TagKind::Emphasis(emphasis) => {
            if emphasis_renders(state, emphasis) {
                state.current_text.push_str(emphasis.delimiter());
            }
            set_emphasis(state, emphasis, false);
        }
        TagKind::Article => state.flags.article = false,
        TagKind::Other => {}
    }
}

/// Handle character data.
pub fn handle_text(state: &mut ParseState, data: &str) {
    if data.is_empty() || state.in_footer() {
        return;
    }

    if state.title_capture.is_some() {
        state.title_buffer.push_str(data);
        return;
    }

    if state.flags.author_paragraph {
        state.author_buffer.push_str(data);
        return;
    }

    if !state.in_rendered_block() {
        return;
    }

    if data.trim().is_empty() {
        // inter-tag spacing
        state.current_text.push_str(data);
        return;
    }

    let after_delimiter = state.current_text.ends_with('*');
    let first = data.chars().next();
    if after_delimiter
        && first.is_some_and(|c| !c.is_whitespace() && !TRAILING_PUNCTUATION.contains(&c))
    {
        state.current_text.push(' ');
    }
    state.current_text.push_str(data);
}

/// True if an emphasis delimiter should be written to the buffer.
///
/// Bold is suppressed inside a definition term, which renders bold as a whole.
fn emphasis_renders(state: &ParseState, emphasis: Emphasis) -> bool {
    if !state.in_rendered_block() {
        return false;
    }
    match emphasis {
        Emphasis::Italic => true,
        Emphasis::Bold => !state.flags.definition_term,
    }
}

fn set_emphasis(state: &mut ParseState, emphasis: Emphasis, value: bool) {
    match emphasis {
        Emphasis::Italic => state.flags.italic = value,
        Emphasis::Bold => state.flags.bold = value,
    }
}
