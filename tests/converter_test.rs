//! Tag-state converter behavior through the public API.

use article_harvest::extractor::convert;
use article_harvest::markdown::ContentBlock;
use article_harvest::{extract_article, Options};

fn content(html: &str) -> String {
    extract_article(html, &Options::default()).content
}

#[test]
fn test_headings_render_as_bold_lines() {
    let html = "<h1>Main</h1><h2>Section</h2><p>Body</p><h4>Deep</h4>";
    let record = extract_article(html, &Options::default());

    assert_eq!(record.title, "Main");
    assert_eq!(record.content, "**Section**\n\nBody\n\n**Deep**");
}

#[test]
fn test_first_h2_is_title_without_h1() {
    let html = "<h2>Only</h2><p>x</p><h2>Second</h2>";
    let record = extract_article(html, &Options::default());

    assert_eq!(record.title, "Only");
    assert_eq!(record.content, "x\n\n**Second**");
}

#[test]
fn test_later_h1_displaces_h2_title() {
    let html = "<h2>Sub</h2><p>a</p><h1>Real</h1><p>b</p>";
    let record = extract_article(html, &Options::default());

    assert_eq!(record.title, "Real");
    assert_eq!(record.content, "**Sub**\n\na\n\nb");
}

#[test]
fn test_only_first_h1_is_title() {
    let html = "<h1>One</h1><h1>Two</h1><p>x</p>";
    let record = extract_article(html, &Options::default());

    assert_eq!(record.title, "One");
    assert_eq!(record.content, "x");
}

#[test]
fn test_title_spans_inline_markup() {
    let html = "<h1>  Don't <em>put</em> your resume\n ahead </h1><p>x</p>";
    let record = extract_article(html, &Options::default());

    assert_eq!(record.title, "Don't put your resume\n ahead");
}

#[test]
fn test_ordered_list() {
    let html = "<ol><li>first</li><li>second</li><li>third</li></ol>";
    assert_eq!(content(html), "1) first\n2) second\n3) third");
}

#[test]
fn test_unordered_list() {
    assert_eq!(content("<ul><li>a</li><li>b</li></ul>"), "- a\n- b");
}

#[test]
fn test_counter_resets_per_list() {
    let html = "<ol><li>a</li><li>b</li></ol><ol><li>c</li></ol>";
    assert_eq!(content(html), "1) a\n2) b\n\n1) c");
}

#[test]
fn test_nested_list_flattened() {
    let html = "<ul><li>outer<ul><li>inner</li></ul></li><li>next</li></ul>";
    assert_eq!(content(html), "- outer\n- inner\n- next");
}

#[test]
fn test_empty_items_skipped() {
    let html = "<ol><li>a</li><li>  </li><li>c</li></ol>";
    assert_eq!(content(html), "1) a\n2) c");
}

#[test]
fn test_definition_list() {
    let html = "<dl><dt>Term</dt><dd>Meaning of the term.</dd></dl>";
    assert_eq!(content(html), "**Term**\n\nMeaning of the term.");
}

#[test]
fn test_italic_emphasis() {
    assert_eq!(content("<p>hello <em>world</em>!</p>"), "hello *world*!");
    assert_eq!(content("<p>a <i>b</i> c</p>"), "a *b* c");
}

#[test]
fn test_bold_emphasis_between_words() {
    assert_eq!(content("<p>a<strong>b</strong>c</p>"), "a **b** c");
    assert_eq!(content("<p>Note <b>this</b>.</p>"), "Note **this**.");
}

#[test]
fn test_emphasis_in_list_items() {
    let html = "<ul><li>use <em>small</em> steps</li></ul>";
    assert_eq!(content(html), "- use *small* steps");
}

#[test]
fn test_literal_asterisk_before_emphasis() {
    let html = "<p>2 * 3 = 6 and <em>x</em></p>";
    assert_eq!(content(html), "2 *3 = 6 and *x*");
}

#[test]
fn test_soft_wrapped_list_item_stays_on_one_line() {
    let html = "<ul><li>item one\n   continued</li><li>two</li></ul>";
    assert_eq!(content(html), "- item one continued\n- two");
}

#[test]
fn test_text_after_nested_list_joins_outer_item() {
    let html = "<ul><li>outer<ul><li>inner</li></ul>tail</li></ul>";
    assert_eq!(content(html), "- outer tail\n- inner");

    let html = "<ol><li>a<ol><li>b</li></ol>c</li><li>d</li></ol>";
    assert_eq!(content(html), "1) a c\n1) b\n2) d");
}

#[test]
fn test_author_prefix_stripped() {
    let html = r#"<h1>T</h1><p class="author">BY Jane Doe</p><p>x</p>"#;
    let record = extract_article(html, &Options::default());

    assert_eq!(record.author, "Jane Doe");
    assert_eq!(record.content, "x");
}

#[test]
fn test_first_author_wins() {
    let html = r#"<p class="author">By Jane</p><p class="author">By John</p><p>x</p>"#;
    assert_eq!(extract_article(html, &Options::default()).author, "Jane");
}

#[test]
fn test_custom_author_class() {
    let opts = Options {
        author_class: "byline".to_string(),
        ..Options::default()
    };
    let html = r#"<p class="byline">by Ann</p><p class="author">ignored</p>"#;
    let record = extract_article(html, &opts);

    assert_eq!(record.author, "Ann");
    assert_eq!(record.content, "ignored");
}

#[test]
fn test_footer_content_excluded() {
    let html = "<article><p>Body</p><footer><p>Footer text</p><h3>Nope</h3>\
                <ul><li>link</li></ul></footer></article>";
    assert_eq!(content(html), "Body");
}

#[test]
fn test_heading_in_footer_not_title() {
    let html = "<footer><h1>Site</h1></footer><h2>Real</h2><p>x</p>";
    assert_eq!(extract_article(html, &Options::default()).title, "Real");
}

#[test]
fn test_soft_wrapped_paragraph_unwrapped() {
    let html = "<p>Line one\n   line two</p>";
    assert_eq!(content(html), "Line one line two");
}

#[test]
fn test_paragraphs_inside_item_join() {
    let html = "<ul><li><p>one</p><p>two</p></li></ul>";
    assert_eq!(content(html), "- one two");
}

#[test]
fn test_unknown_wrappers_do_not_hide_paragraphs() {
    let html = "<custom-wrapper><x-body><p>Hi</p></x-body></custom-wrapper>";
    assert_eq!(content(html), "Hi");
}

#[test]
fn test_convert_exposes_blocks() {
    let out = convert("<h1>T</h1><p>a</p><dl><dt>k</dt></dl>", &Options::default());

    assert_eq!(out.title, "T");
    assert_eq!(
        out.blocks,
        vec![
            ContentBlock::Paragraph("a".into()),
            ContentBlock::DefinitionTerm("k".into()),
        ]
    );
}
