//! Harvest loop against an in-memory document source.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use article_harvest::harvest::{harvest, summary_lines};
use article_harvest::{DocumentSource, Error, FallbackOrder, HarvestConfig, Result};

struct MemorySource {
    pages: HashMap<&'static str, &'static str>,
}

impl DocumentSource for MemorySource {
    fn fetch(&self, id: &str) -> Result<String> {
        match self.pages.get(id) {
            Some(html) => Ok((*html).to_string()),
            None if id.starts_with("bad-utf8") => {
                Err(Error::Decode("invalid utf-8 sequence of 1 bytes from index 3".into()))
            }
            None => Err(Error::Fetch("<urlopen error timed out>".into())),
        }
    }
}

fn source() -> MemorySource {
    MemorySource {
        pages: HashMap::from([
            (
                "Stand_Up.htm",
                r#"<h1>Stand Up!</h1><p class="author">By Udi Dahan</p><p>Speak up.</p>"#,
            ),
            (
                "Quantify.htm",
                r#"<h1>Quantify</h1><p class="author">By Keith Braithwaite</p><ul><li>How many?</li></ul>"#,
            ),
            (
                "Swallowed.htm",
                "<html><head><title>Unclosed<ol><li>item</li></ol><p>para</p>",
            ),
        ]),
    }
}

fn config(ids: &[&str]) -> HarvestConfig {
    HarvestConfig {
        documents: ids.iter().map(ToString::to_string).collect(),
        delay: Duration::ZERO,
        ..HarvestConfig::default()
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("article-harvest-{}-{name}", std::process::id()))
}

#[test]
fn test_records_follow_input_order() {
    let collection = harvest(&source(), &config(&["Quantify.htm", "Stand_Up.htm"]));

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.inspiration[0].title, "Quantify");
    assert_eq!(collection.inspiration[0].content, "- How many?");
    assert_eq!(collection.inspiration[1].title, "Stand Up!");
    assert_eq!(collection.inspiration[1].author, "Udi Dahan");
}

#[test]
fn test_failures_become_placeholders_and_run_continues() {
    let ids = ["missing.htm", "Stand_Up.htm", "bad-utf8.htm"];
    let collection = harvest(&source(), &config(&ids));

    assert_eq!(collection.len(), 3);

    let missing = &collection.inspiration[0];
    assert_eq!(missing.title, "Error: missing.htm");
    assert_eq!(missing.author, "Unknown");
    assert_eq!(missing.content, "Failed to fetch article: <urlopen error timed out>");

    assert_eq!(collection.inspiration[1].title, "Stand Up!");

    let undecodable = &collection.inspiration[2];
    assert_eq!(undecodable.title, "Error: bad-utf8.htm");
    assert!(undecodable
        .content
        .starts_with("Failed to fetch article: response is not valid UTF-8"));
}

#[test]
fn test_conversion_options_applied() {
    let mut cfg = config(&["Swallowed.htm"]);
    let grouped = harvest(&source(), &cfg);
    assert_eq!(grouped.inspiration[0].content, "para\n\n1) item");

    cfg.options.fallback_order = FallbackOrder::Document;
    let ordered = harvest(&source(), &cfg);
    assert_eq!(ordered.inspiration[0].content, "1) item\n\npara");

    cfg.options.use_fallback = false;
    let without = harvest(&source(), &cfg);
    assert_eq!(without.inspiration[0].content, "");
}

#[test]
fn test_delay_only_between_documents() {
    let mut cfg = config(&["Stand_Up.htm", "Quantify.htm"]);
    cfg.delay = Duration::from_millis(40);

    let start = Instant::now();
    let collection = harvest(&source(), &cfg);
    let elapsed = start.elapsed();

    assert_eq!(collection.len(), 2);
    assert!(elapsed >= Duration::from_millis(40));
}

#[test]
fn test_output_written_with_trailing_newline() {
    let collection = harvest(&source(), &config(&["Stand_Up.htm"]));
    let path = temp_path("output.json");

    collection.write_to(&path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(written.starts_with("{\n  \"inspiration\": [\n    {\n      \"title\": \"Stand Up!\""));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_manifest_replaces_documents() {
    let path = temp_path("manifest.txt");
    fs::write(&path, "# essays\nStand_Up.htm\n\n  Quantify.htm\n").unwrap();

    let mut cfg = HarvestConfig::default();
    cfg.load_manifest(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(cfg.documents, ["Stand_Up.htm", "Quantify.htm"]);
}

#[test]
fn test_empty_manifest_rejected() {
    let path = temp_path("empty-manifest.txt");
    fs::write(&path, "# nothing here\n\n").unwrap();

    let mut cfg = HarvestConfig::default();
    let err = cfg.load_manifest(&path).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_missing_manifest_is_io_error() {
    let mut cfg = HarvestConfig::default();
    let err = cfg.load_manifest(&temp_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_summary_after_harvest() {
    let collection = harvest(&source(), &config(&["Stand_Up.htm", "missing.htm"]));
    assert_eq!(
        summary_lines(&collection),
        ["1. Stand Up! by Udi Dahan", "2. Error: missing.htm by Unknown"]
    );
}
