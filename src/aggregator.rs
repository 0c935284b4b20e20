use crate::fetcher::PageFetcher;
use crate::pipeline::{scrape_source, SourceScrape};
use crate::types::{HackathonRecord, SiteParser};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Scheduling knobs for the per-source units of work
#[derive(Debug, Clone, Default)]
pub struct AggregatorOptions {
    /// Upper bound on concurrently running sources; defaults to one worker per source
    pub max_workers: Option<usize>,
    /// Give up on a source that has not finished after this long
    pub unit_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Completed,
    Failed(String),
    TimedOut,
}

/// Per-source outcome, in completion order
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub source: String,
    pub records: usize,
    pub detail_failures: usize,
    pub status: SourceStatus,
}

#[derive(Debug, Clone, Default)]
pub struct AggregateReport {
    pub records: Vec<HackathonRecord>,
    pub sources: Vec<SourceSummary>,
}

enum UnitOutcome {
    Finished(crate::error::Result<SourceScrape>),
    TimedOut,
}

/// Runs each source's scrape as an independent task and merges the records
/// in the order the tasks complete.
pub struct Aggregator {
    fetcher: Arc<dyn PageFetcher>,
    options: AggregatorOptions,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, options: AggregatorOptions) -> Self {
        Self { fetcher, options }
    }

    /// Scrape every source. Never fails: a source whose listing cannot be
    /// fetched, that panics, or that times out contributes zero records.
    pub async fn run(&self, sources: Vec<Arc<dyn SiteParser>>) -> AggregateReport {
        let mut report = AggregateReport::default();
        if sources.is_empty() {
            warn!("No sources configured, nothing to scrape");
            return report;
        }

        let workers = self.options.max_workers.unwrap_or(sources.len()).max(1);
        info!("Scraping {} sources with {} workers", sources.len(), workers);
        let semaphore = Arc::new(Semaphore::new(workers));

        // Names of units that have not reported back; whatever is left after
        // the join loop died without returning its name.
        let mut pending: Vec<&'static str> = sources.iter().map(|s| s.source_name()).collect();

        let mut units = JoinSet::new();
        for parser in sources {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            let unit_timeout = self.options.unit_timeout;

            units.spawn(async move {
                let source = parser.source_name();
                let _permit = semaphore.acquire_owned().await.ok();
                let work = scrape_source(parser.as_ref(), fetcher.as_ref());
                let outcome = match unit_timeout {
                    Some(limit) => match tokio::time::timeout(limit, work).await {
                        Ok(result) => UnitOutcome::Finished(result),
                        Err(_) => UnitOutcome::TimedOut,
                    },
                    None => UnitOutcome::Finished(work.await),
                };
                (source, outcome)
            });
        }

        while let Some(joined) = units.join_next().await {
            let (source, outcome) = match joined {
                Ok(done) => done,
                Err(e) => {
                    error!("Source task aborted: {}", e);
                    continue;
                }
            };
            if let Some(pos) = pending.iter().position(|name| *name == source) {
                pending.remove(pos);
            }

            let summary = match outcome {
                UnitOutcome::Finished(Ok(scrape)) => {
                    let summary = SourceSummary {
                        source: scrape.source,
                        records: scrape.records.len(),
                        detail_failures: scrape.detail_failures,
                        status: SourceStatus::Completed,
                    };
                    report.records.extend(scrape.records);
                    summary
                }
                UnitOutcome::Finished(Err(e)) => {
                    error!("Source {} failed: {}", source, e);
                    SourceSummary {
                        source: source.to_string(),
                        records: 0,
                        detail_failures: 0,
                        status: SourceStatus::Failed(e.to_string()),
                    }
                }
                UnitOutcome::TimedOut => {
                    error!("Source {} timed out", source);
                    SourceSummary {
                        source: source.to_string(),
                        records: 0,
                        detail_failures: 0,
                        status: SourceStatus::TimedOut,
                    }
                }
            };
            report.sources.push(summary);
        }

        for source in pending {
            report.sources.push(SourceSummary {
                source: source.to_string(),
                records: 0,
                detail_failures: 0,
                status: SourceStatus::Failed("task aborted".to_string()),
            });
        }

        info!(
            "Aggregated {} records from {} sources",
            report.records.len(),
            report.sources.len()
        );
        report
    }
}
