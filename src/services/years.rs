// src/services/years.rs

//! Year page crawler.
//!
//! A year page lists one link per subject:
//!
//! ```text
//! <div class="content">
//!     <div><a href="/dissertations/485/completed">1500 BCE to 500 BCE</a></div>
//!     <div><a href="/dissertations/426/completed">Africa</a></div>
//! </div>
//! ```

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{CrawlOutcome, ParseFailure, SiteConfig, SubjectLink};
use crate::services::subjects::extract_subject;
use crate::utils::http::PageFetcher;
use crate::utils::url::{is_completed_subject_href, resolve};
use crate::utils::{normalize_whitespace, parse_selector};

/// Service for crawling every subject listed for a year.
pub struct YearCrawler<'a> {
    fetcher: &'a dyn PageFetcher,
    site: &'a SiteConfig,
}

impl<'a> YearCrawler<'a> {
    /// Create a new year crawler.
    pub fn new(fetcher: &'a dyn PageFetcher, site: &'a SiteConfig) -> Self {
        Self { fetcher, site }
    }

    /// Crawl one year's subjects, tagging results with subject and year.
    pub fn crawl_year(&self, year: u16) -> Result<CrawlOutcome> {
        let document = self.fetcher.fetch(&self.site.year_url(year))?;
        let links = self.subject_links(&document)?;
        log::debug!("{year}: found {} subjects", links.len());

        let mut outcome = CrawlOutcome::default();
        for link in links {
            log::debug!("  {} ({})", link.subject, link.url);

            let page = self.fetcher.fetch(&link.url)?;
            let extraction = extract_subject(&page, &link.expected_in_progress_href())?;

            outcome.records.extend(
                extraction
                    .entries
                    .into_iter()
                    .map(|entry| entry.into_record(&link.subject, year)),
            );
            outcome
                .failures
                .extend(extraction.failures.into_iter().map(|raw_text| ParseFailure {
                    year,
                    subject: link.subject.clone(),
                    raw_text,
                }));
        }

        Ok(outcome)
    }

    /// Find the completed-by-subject links on a year page, in page order.
    pub fn subject_links(&self, document: &Html) -> Result<Vec<SubjectLink>> {
        let link_sel = parse_selector("a[href]")?;
        let mut links = Vec::new();

        for anchor in document.select(&link_sel) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !is_completed_subject_href(href) {
                continue;
            }

            let subject = normalize_whitespace(&anchor.text().collect::<String>());
            if subject.is_empty() {
                return Err(AppError::structure(format!(
                    "subject link {href} has no text"
                )));
            }

            links.push(SubjectLink {
                subject,
                href: href.to_string(),
                url: resolve(&self.site.base_url, href)?,
            });
        }

        Ok(links)
    }
}
