use hackathon_scraper::error::{Result, ScraperError};
use hackathon_scraper::PageFetcher;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory fetcher: serves canned pages, fails on unknown URLs, and
/// records every URL it was asked for.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    fetch_count: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        self.pages.get(url).cloned().ok_or_else(|| {
            ScraperError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused: {url}"),
            ))
        })
    }
}

#[allow(dead_code)]
pub const DEVPOST_LISTING_URL: &str = "https://devpost.com/hackathons";
#[allow(dead_code)]
pub const HACKCLUB_LISTING_URL: &str = "https://hackathons.hackclub.com/";

#[allow(dead_code)]
pub fn devpost_listing(tiles: &[(&str, Option<&str>)]) -> String {
    let body: String = tiles
        .iter()
        .map(|(name, href)| match href {
            Some(href) => format!(
                r#"<div class="hackathon-tile"><a href="{href}"><h3 class="title">{name}</h3></a></div>"#
            ),
            None => format!(r#"<div class="hackathon-tile"><h3 class="title">{name}</h3></div>"#),
        })
        .collect();
    format!("<html><body>{body}</body></html>")
}

#[allow(dead_code)]
pub fn hackclub_listing(links: &[(&str, &str)]) -> String {
    let body: String = links
        .iter()
        .map(|(name, href)| format!(r#"<a href="{href}">{name}</a>"#))
        .collect();
    format!("<html><body><a href=\"/about\">About</a>{body}</body></html>")
}
