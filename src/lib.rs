pub mod aggregator;
pub mod apis;
pub mod config;
pub mod constants;
pub mod contacts;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod types;

pub use aggregator::{AggregateReport, Aggregator, AggregatorOptions, SourceStatus, SourceSummary};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use types::{DetailInfo, HackathonRecord, HackathonStub, SiteParser};
