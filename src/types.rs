use serde::{Deserialize, Serialize};

/// One aggregated hackathon, as written to the output files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackathonRecord {
    pub name: Option<String>,
    pub link: Option<String>,
    pub sponsors: Vec<String>,
    pub contacts: Vec<String>,
}

impl HackathonRecord {
    pub fn from_stub(stub: HackathonStub, detail: DetailInfo) -> Self {
        Self {
            name: stub.name,
            link: stub.link,
            sponsors: detail.sponsors,
            contacts: detail.contacts,
        }
    }
}

/// Listing-page entry prior to detail-page enrichment. `link` is already absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackathonStub {
    pub name: Option<String>,
    pub link: Option<String>,
}

/// What a detail page yields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailInfo {
    pub sponsors: Vec<String>,
    pub contacts: Vec<String>,
}

/// Core trait that every hackathon listing site must implement.
///
/// Implementations are pure markup transforms; fetching happens in the pipeline.
pub trait SiteParser: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Absolute URL of the listing page
    fn listing_url(&self) -> String;

    /// Extract hackathon stubs from listing markup
    fn parse_listing(&self, html: &str) -> Vec<HackathonStub>;

    /// Extract sponsors and contacts from detail markup
    fn parse_detail(&self, html: &str) -> DetailInfo;
}
