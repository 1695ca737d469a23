//! Harvest the document catalog and write the collected articles as JSON.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use article_harvest::harvest::{self, summary_lines};
use article_harvest::{FallbackOrder, HarvestConfig};

#[derive(Parser)]
#[command(
    name = "fetch_articles",
    about = "Fetch article pages and extract title, author and content"
)]
struct Cli {
    /// Location the document identifiers resolve against
    #[arg(long)]
    base_url: Option<String>,

    /// Output JSON file
    #[arg(short, long, default_value = "articles.json")]
    output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Pause between requests in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// User-Agent header sent with each request
    #[arg(long, default_value = "Mozilla/5.0")]
    user_agent: String,

    /// File with one document identifier per line (default: built-in catalog)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Max documents to harvest (default: all)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Emit fallback blocks in source order instead of grouped by kind
    #[arg(long)]
    document_order: bool,

    /// Never run the regex fallback extractor
    #[arg(long)]
    no_fallback: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<HarvestConfig> {
        let mut config = HarvestConfig {
            output: self.output,
            timeout: Duration::from_secs(self.timeout_secs),
            delay: Duration::from_millis(self.delay_ms),
            user_agent: self.user_agent,
            ..HarvestConfig::default()
        };
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(path) = &self.manifest {
            config
                .load_manifest(path)
                .with_context(|| format!("Failed to load manifest {}", path.display()))?;
        }
        if let Some(limit) = self.limit {
            config.truncate(limit);
        }
        if self.document_order {
            config.options.fallback_order = FallbackOrder::Document;
        }
        config.options.use_fallback = !self.no_fallback;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let config = Cli::parse().into_config()?;

    let collection = harvest::run(&config).context("Harvest failed")?;

    println!("\nSuccessfully parsed {} articles!", collection.len());
    println!("Output written to: {}", config.output.display());

    println!("\n=== Summary ===");
    for line in summary_lines(&collection) {
        println!("{line}");
    }

    println!("\nDone in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
