use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::types::{DetailInfo, HackathonRecord, SiteParser};
use metrics::counter;
use tracing::{debug, info, instrument, warn};

/// Result of one source's listing + detail run
#[derive(Debug, Clone)]
pub struct SourceScrape {
    pub source: String,
    pub records: Vec<HackathonRecord>,
    pub detail_failures: usize,
}

/// Run the complete listing + detail pipeline for one source.
///
/// A listing fetch failure is returned to the caller. Detail fetch failures
/// are logged and degrade only their own record to empty sponsors/contacts.
/// Detail pages are fetched one after another, in listing order.
#[instrument(skip(parser, fetcher), fields(source = %parser.source_name()))]
pub async fn scrape_source(
    parser: &dyn SiteParser,
    fetcher: &dyn PageFetcher,
) -> Result<SourceScrape> {
    let source = parser.source_name();
    let listing_url = parser.listing_url();

    info!("Fetching listing {}", listing_url);
    counter!("hackathon_pages_fetched_total", "source" => source).increment(1);
    let listing = fetcher.fetch(&listing_url).await?;
    let stubs = parser.parse_listing(&listing);
    info!("Found {} hackathons on {} listing", stubs.len(), source);

    let mut records = Vec::with_capacity(stubs.len());
    let mut detail_failures = 0;

    for stub in stubs {
        let detail = match stub.link.as_deref() {
            Some(link) => {
                counter!("hackathon_pages_fetched_total", "source" => source).increment(1);
                match fetcher.fetch(link).await {
                    Ok(html) => parser.parse_detail(&html),
                    Err(e) => {
                        warn!("Error scraping {}: {}", link, e);
                        counter!("hackathon_fetch_errors_total", "source" => source).increment(1);
                        detail_failures += 1;
                        DetailInfo::default()
                    }
                }
            }
            None => {
                debug!("No link for {:?}, skipping detail page", stub.name);
                DetailInfo::default()
            }
        };
        records.push(HackathonRecord::from_stub(stub, detail));
    }

    counter!("hackathon_records_total", "source" => source).increment(records.len() as u64);
    info!(
        "✅ {} produced {} records ({} detail failures)",
        source,
        records.len(),
        detail_failures
    );

    Ok(SourceScrape {
        source: source.to_string(),
        records,
        detail_failures,
    })
}
