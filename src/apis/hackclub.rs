use crate::apis::common::{parse_selector, resolve_link, stripped_text, DetailExtractor};
use crate::constants::{HACKCLUB_BASE_URL, HACKCLUB_LISTING_PATH, HACKCLUB_SOURCE};
use crate::error::Result;
use crate::types::{DetailInfo, HackathonStub, SiteParser};
use scraper::{Html, Selector};
use tracing::debug;

/// Hack Club listing: every anchor pointing somewhere under `/hackathons/`
/// is a hackathon, named by its visible text.
pub struct HackClubParser {
    base_url: String,
    link_selector: Selector,
    detail: DetailExtractor,
}

impl HackClubParser {
    pub fn new() -> Result<Self> {
        Self::with_base_url(HACKCLUB_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            link_selector: parse_selector(r#"a[href*="/hackathons/"]"#)?,
            detail: DetailExtractor::new()?,
        })
    }
}

impl SiteParser for HackClubParser {
    fn source_name(&self) -> &'static str {
        HACKCLUB_SOURCE
    }

    fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, HACKCLUB_LISTING_PATH)
    }

    fn parse_listing(&self, html: &str) -> Vec<HackathonStub> {
        let document = Html::parse_document(html);

        let stubs: Vec<HackathonStub> = document
            .select(&self.link_selector)
            .map(|anchor| {
                let name = Some(stripped_text(anchor)).filter(|s| !s.is_empty());
                let link = anchor
                    .value()
                    .attr("href")
                    .and_then(|href| resolve_link(&self.base_url, href));
                HackathonStub { name, link }
            })
            .collect();

        debug!("Found {} hackathon links on Hack Club listing", stubs.len());
        stubs
    }

    fn parse_detail(&self, html: &str) -> DetailInfo {
        self.detail.extract(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hackclub_listing_url() {
        let parser = HackClubParser::new().unwrap();
        assert_eq!(parser.source_name(), "hackclub");
        assert_eq!(parser.listing_url(), "https://hackathons.hackclub.com/");
    }

    #[test]
    fn test_hackclub_parse_listing() {
        let html = r#"
            <html><body>
              <nav><a href="/about">About</a></nav>
              <a href="/hackathons/counterspell"><h2>Counterspell</h2><p> Online </p></a>
              <a href="https://hackathons.hackclub.com/hackathons/scrapyard">Scrapyard</a>
              <a href="/hackathons/mystery"><img src="x.png"></a>
              <a href="https://example.com/events">Elsewhere</a>
            </body></html>
        "#;
        let parser = HackClubParser::new().unwrap();
        let stubs = parser.parse_listing(html);

        assert_eq!(stubs.len(), 3);
        assert_eq!(stubs[0].name.as_deref(), Some("Counterspell Online"));
        assert_eq!(
            stubs[0].link.as_deref(),
            Some("https://hackathons.hackclub.com/hackathons/counterspell")
        );
        assert_eq!(stubs[1].name.as_deref(), Some("Scrapyard"));
        assert_eq!(
            stubs[1].link.as_deref(),
            Some("https://hackathons.hackclub.com/hackathons/scrapyard")
        );
        assert_eq!(stubs[2].name, None);
        assert_eq!(
            stubs[2].link.as_deref(),
            Some("https://hackathons.hackclub.com/hackathons/mystery")
        );
    }

    #[test]
    fn test_hackclub_detail_uses_shared_heuristics() {
        let parser = HackClubParser::new().unwrap();
        let info = parser.parse_detail(
            r#"<div class="partner">GitHub</div><footer>team@hackclub.com</footer>"#,
        );
        assert_eq!(info.sponsors, vec!["GitHub"]);
        assert_eq!(info.contacts, vec!["team@hackclub.com"]);
    }
}
