// src/pipeline/crawl.rs

//! Crawl every configured year.

use crate::error::Result;
use crate::models::{Config, CrawlOutcome};
use crate::services::YearCrawler;
use crate::utils::http::PageFetcher;

/// Crawl the configured year range and concatenate the per-year results.
///
/// The first structural or network error aborts the whole crawl.
pub fn run_crawler(config: &Config, fetcher: &dyn PageFetcher) -> Result<CrawlOutcome> {
    let crawler = YearCrawler::new(fetcher, &config.site);
    let mut outcome = CrawlOutcome::default();

    for year in config.years.iter() {
        let year_outcome = crawler.crawl_year(year)?;
        log::info!(
            "{year}: {} records, {} unparsed",
            year_outcome.records.len(),
            year_outcome.failures.len()
        );
        outcome.extend(year_outcome);
    }

    Ok(outcome)
}
