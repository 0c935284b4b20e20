use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use hackathon_scraper::apis::factory::create_parsers;
use hackathon_scraper::config::{Config, ConfigOverrides};
use hackathon_scraper::constants;
use hackathon_scraper::logging;
use hackathon_scraper::output::{write_results, OutputPaths};
use hackathon_scraper::{Aggregator, HttpFetcher, PageFetcher, SourceStatus};

#[derive(Parser)]
#[command(name = "hackathon_scraper")]
#[command(about = "Collect hackathon sponsors and contacts from Devpost and Hack Club")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Specific sources to run (comma-separated). Available: devpost, hackclub
    #[arg(long, value_delimiter = ',')]
    sources: Option<Vec<String>>,

    /// Output files are <prefix>.csv and <prefix>.json
    #[arg(long)]
    output_prefix: Option<String>,

    /// Maximum number of sources scraped at once (default: one per source)
    #[arg(long)]
    workers: Option<usize>,

    /// Abandon a source that takes longer than this many seconds
    #[arg(long)]
    unit_timeout_secs: Option<u64>,

    /// Also write JSON logs to a daily file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_logging(cli.log_dir.as_deref());

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(ConfigOverrides {
        sources: cli
            .sources
            .map(|names| names.into_iter().map(|s| s.trim().to_string()).collect()),
        output_prefix: cli.output_prefix,
        workers: cli.workers,
        unit_timeout_secs: cli.unit_timeout_secs,
    });
    config.validate().with_context(|| {
        format!(
            "invalid configuration (supported sources: {})",
            constants::get_supported_sources().join(", ")
        )
    })?;

    let parsers = create_parsers(&config.sources)?;
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new());
    let aggregator = Aggregator::new(fetcher, config.aggregator_options());

    println!("Scraping hackathons from all sources...");
    let report = aggregator.run(parsers).await;

    for summary in &report.sources {
        match &summary.status {
            SourceStatus::Completed => info!(
                "{}: {} records, {} detail pages failed",
                summary.source, summary.records, summary.detail_failures
            ),
            SourceStatus::Failed(reason) => warn!("{}: failed ({})", summary.source, reason),
            SourceStatus::TimedOut => warn!("{}: timed out", summary.source),
        }
    }

    println!("Found {} hackathons.", report.records.len());

    let paths = OutputPaths::from_prefix(&config.output_prefix);
    write_results(&report.records, &paths).context("failed to write results")?;
    println!(
        "Results saved to {} and {}.",
        paths.csv.display(),
        paths.json.display()
    );

    Ok(())
}
