use crate::apis::{DevpostParser, HackClubParser};
use crate::config::SourceConfig;
use crate::constants::{DEVPOST_SOURCE, HACKCLUB_SOURCE};
use crate::error::{Result, ScraperError};
use crate::types::SiteParser;
use std::sync::Arc;

/// Factory function to create a site parser by source name.
///
/// `base_url` overrides the site's default origin (mirrors, local fixtures).
pub fn create_parser(source: &str, base_url: Option<&str>) -> Result<Arc<dyn SiteParser>> {
    let parser: Arc<dyn SiteParser> = match (source, base_url) {
        (DEVPOST_SOURCE, None) => Arc::new(DevpostParser::new()?),
        (DEVPOST_SOURCE, Some(url)) => Arc::new(DevpostParser::with_base_url(url)?),
        (HACKCLUB_SOURCE, None) => Arc::new(HackClubParser::new()?),
        (HACKCLUB_SOURCE, Some(url)) => Arc::new(HackClubParser::with_base_url(url)?),
        (other, _) => return Err(ScraperError::UnknownSource(other.to_string())),
    };
    Ok(parser)
}

/// Build parsers for every configured source, preserving configuration order
pub fn create_parsers(sources: &[SourceConfig]) -> Result<Vec<Arc<dyn SiteParser>>> {
    sources
        .iter()
        .map(|s| create_parser(&s.name, s.base_url.as_deref()))
        .collect()
}
