use article_harvest::dom;
use article_harvest::extractor::{convert_events, extract_text_fallback};
use article_harvest::{extract_article, Options};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    let record = extract_article("<p>text<div>more", &Options::default());
    assert!(record.content.contains("text"));
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    let html = "<p><em>one</p><li>two</em></ul></ol></dl></footer></h2>";
    let record = extract_article(html, &Options::default());
    assert!(record.content.contains("one"));
}

#[test]
fn extract_keeps_items_of_unclosed_list() {
    let record = extract_article("<ul><li>a<li>b", &Options::default());
    assert_eq!(record.content, "- a\n- b");
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let record = extract_article("<p class=\"author id=broken>Jane</p>", &Options::default());
    assert!(record.title.is_empty());
}

#[test]
fn extract_does_not_panic_on_incomplete_entities() {
    let record = extract_article("<p>&amp text &lt;</p>", &Options::default());
    assert_eq!(record.content, "& text <");
}

#[test]
fn extract_returns_empty_record_for_empty_string() {
    let record = extract_article("", &Options::default());
    assert!(record.title.is_empty());
    assert!(record.author.is_empty());
    assert!(record.content.is_empty());
}

#[test]
fn converter_ignores_stray_end_events() {
    let events = [
        dom::HtmlEvent::end("p"),
        dom::HtmlEvent::end("footer"),
        dom::HtmlEvent::end("ol"),
        dom::HtmlEvent::end("h1"),
        dom::HtmlEvent::start("p"),
        dom::HtmlEvent::text("still here"),
        dom::HtmlEvent::end("p"),
    ];
    let out = convert_events(&events, &Options::default());
    assert_eq!(out.blocks.len(), 1);
}

#[test]
fn converter_handles_events_without_parser_fixups() {
    // a raw event stream can leave blocks open; whatever was flushed is kept
    let events = [
        dom::HtmlEvent::start("ol"),
        dom::HtmlEvent::start("li"),
        dom::HtmlEvent::text("first"),
        dom::HtmlEvent::end("li"),
        dom::HtmlEvent::start("li"),
        dom::HtmlEvent::text("dangling"),
    ];
    let out = convert_events(&events, &Options::default());
    assert_eq!(out.blocks.len(), 1);
}

#[test]
fn deeply_nested_markup_does_not_overflow() {
    let depth = 5_000;
    let html = format!("{}<p>deep</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let record = extract_article(&html, &Options::default());
    assert!(record.content.contains("deep"));
}

#[test]
fn fallback_does_not_panic_on_unterminated_tags() {
    let html = "<p>open <em>never closed <h2>x<ol><li>y";
    assert_eq!(extract_text_fallback(html, &Options::default()), "");
}

#[test]
fn extract_large_document_completes_in_reasonable_time() {
    let paragraph = "<p>Lorem ipsum <em>dolor</em> sit amet, <b>consectetur</b> adipiscing.</p>";
    let html = format!("<article><h1>Big</h1>{}</article>", paragraph.repeat(5_000));

    let start = Instant::now();
    let record = extract_article(&html, &Options::default());
    assert!(start.elapsed() < Duration::from_secs(20));
    assert_eq!(record.content.matches("*dolor*").count(), 5_000);
}
