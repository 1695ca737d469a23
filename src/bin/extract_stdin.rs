//! Simple CLI that reads HTML from stdin and outputs the article record as JSON.

use std::io::{self, Read};

use anyhow::Context;

use article_harvest::{extract_article, Options};

fn main() -> anyhow::Result<()> {
    let mut html = String::new();
    io::stdin()
        .read_to_string(&mut html)
        .context("Failed to read UTF-8 HTML from stdin")?;

    let record = extract_article(&html, &Options::default());

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
