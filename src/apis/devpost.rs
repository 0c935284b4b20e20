use crate::apis::common::{parse_selector, resolve_link, stripped_text, DetailExtractor};
use crate::constants::{DEVPOST_BASE_URL, DEVPOST_LISTING_PATH, DEVPOST_SOURCE};
use crate::error::Result;
use crate::types::{DetailInfo, HackathonStub, SiteParser};
use scraper::{Html, Selector};
use tracing::debug;

/// Devpost listing: one `.hackathon-tile` per hackathon, the name in a
/// `.title` child and the detail link on the first anchor inside the tile.
///
/// Tied to Devpost's current class names; if they change the parser yields
/// no stubs (or stubs with empty fields) rather than an error.
pub struct DevpostParser {
    base_url: String,
    tile_selector: Selector,
    title_selector: Selector,
    anchor_selector: Selector,
    detail: DetailExtractor,
}

impl DevpostParser {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEVPOST_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tile_selector: parse_selector(".hackathon-tile")?,
            title_selector: parse_selector(".title")?,
            anchor_selector: parse_selector("a")?,
            detail: DetailExtractor::new()?,
        })
    }
}

impl SiteParser for DevpostParser {
    fn source_name(&self) -> &'static str {
        DEVPOST_SOURCE
    }

    fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, DEVPOST_LISTING_PATH)
    }

    fn parse_listing(&self, html: &str) -> Vec<HackathonStub> {
        let document = Html::parse_document(html);

        let stubs: Vec<HackathonStub> = document
            .select(&self.tile_selector)
            .map(|tile| {
                let name = tile
                    .select(&self.title_selector)
                    .next()
                    .map(stripped_text)
                    .filter(|s| !s.is_empty());
                let link = tile
                    .select(&self.anchor_selector)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .and_then(|href| resolve_link(&self.base_url, href));
                HackathonStub { name, link }
            })
            .collect();

        debug!("Found {} hackathon tiles on Devpost listing", stubs.len());
        stubs
    }

    fn parse_detail(&self, html: &str) -> DetailInfo {
        self.detail.extract(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <div class="hackathon-tile">
            <a href="/hackathons/hacknyc"><h3 class="title"> HackNYC </h3></a>
          </div>
          <div class="hackathon-tile featured">
            <a href="https://treehacks.devpost.com/"><h3 class="title">TreeHacks</h3></a>
          </div>
          <div class="hackathon-tile">
            <h3 class="title">No Link Jam</h3>
          </div>
          <div class="hackathon-tile">
            <a href="/hackathons/untitled">Register</a>
          </div>
          <div class="challenge-card">
            <a href="/hackathons/ignored"><h3 class="title">Not a tile</h3></a>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_devpost_source_name_and_listing_url() {
        let parser = DevpostParser::new().unwrap();
        assert_eq!(parser.source_name(), "devpost");
        assert_eq!(parser.listing_url(), "https://devpost.com/hackathons");
    }

    #[test]
    fn test_devpost_parse_listing() {
        let parser = DevpostParser::new().unwrap();
        let stubs = parser.parse_listing(LISTING);

        assert_eq!(stubs.len(), 4);
        assert_eq!(stubs[0].name.as_deref(), Some("HackNYC"));
        assert_eq!(
            stubs[0].link.as_deref(),
            Some("https://devpost.com/hackathons/hacknyc")
        );
        assert_eq!(stubs[1].name.as_deref(), Some("TreeHacks"));
        assert_eq!(stubs[1].link.as_deref(), Some("https://treehacks.devpost.com/"));
        assert_eq!(stubs[2].name.as_deref(), Some("No Link Jam"));
        assert_eq!(stubs[2].link, None);
        assert_eq!(stubs[3].name, None);
        assert_eq!(
            stubs[3].link.as_deref(),
            Some("https://devpost.com/hackathons/untitled")
        );
    }

    #[test]
    fn test_devpost_links_follow_configured_origin() {
        let parser = DevpostParser::with_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(parser.listing_url(), "http://127.0.0.1:8080/hackathons");
        let stubs = parser.parse_listing(LISTING);
        assert_eq!(
            stubs[0].link.as_deref(),
            Some("http://127.0.0.1:8080/hackathons/hacknyc")
        );
    }

    #[test]
    fn test_devpost_blank_title_is_absent() {
        let parser = DevpostParser::new().unwrap();
        let stubs = parser.parse_listing(
            r#"<div class="hackathon-tile"><a href="/hackathons/tba"><h3 class="title">  </h3></a></div>"#,
        );
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].name, None);
        assert_eq!(
            stubs[0].link.as_deref(),
            Some("https://devpost.com/hackathons/tba")
        );
    }

    #[test]
    fn test_devpost_empty_listing() {
        let parser = DevpostParser::new().unwrap();
        assert!(parser.parse_listing("<html><body></body></html>").is_empty());
    }
}
