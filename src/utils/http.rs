// src/utils/http.rs

//! HTTP client utilities.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Source of parsed HTML pages.
///
/// The crawl only ever asks for one page at a time and never caches it.
pub trait PageFetcher {
    /// Fetch `url` and parse the body as an HTML document.
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML. Non-2xx responses are errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<Html> {
    let response = client.get(url).send()?.error_for_status()?;
    let text = response.text()?;
    Ok(Html::parse_document(&text))
}

/// Live fetcher backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    delay: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from crawler settings.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            delay: Duration::from_millis(config.request_delay_ms),
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        log::debug!("GET {url}");
        let document = fetch_page(&self.client, url)?;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(document)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::StaticPages;
    use super::*;

    #[test]
    fn test_create_client_from_defaults() {
        assert!(create_client(&CrawlerConfig::default()).is_ok());
    }

    #[test]
    fn test_static_pages_serves_and_records() {
        let pages = StaticPages::default().with_page("http://x/a", "<p>hi</p>");
        assert!(pages.fetch("http://x/a").is_ok());
        assert!(pages.fetch("http://x/missing").is_err());
        assert_eq!(*pages.requested.borrow(), ["http://x/a", "http://x/missing"]);
    }
}
