use crate::error::Result;
use tracing::{debug, instrument, warn};

/// Retrieves raw page markup for a URL
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain reqwest-backed fetcher: one GET per call, client defaults for
/// headers, timeouts and redirects, no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    /// Non-2xx responses still return their body; only transport failures are errors.
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!("GET {} -> {}", url, status.as_u16());
        } else {
            warn!("GET {} -> {}, using body anyway", url, status.as_u16());
        }
        let body = response.text().await?;
        Ok(body)
    }
}
