// src/pipeline/run.rs

use std::io;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::Config;
use crate::storage::{write_failure_report, write_failures_json, write_records_csv};
use crate::utils::http::PageFetcher;

use super::crawl::run_crawler;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub years: usize,
    pub records: usize,
    pub failures: usize,
    pub csv_path: PathBuf,
    pub failures_path: Option<PathBuf>,
}

/// Crawl, report failures, then write the output files.
///
/// Output is only written once every year has been crawled, and the CSV is
/// written last.
pub fn run(config: &Config, fetcher: &dyn PageFetcher) -> Result<RunSummary> {
    log::info!(
        "Crawling {} through {} from {}",
        config.years.start,
        config.years.end,
        config.site.base_url
    );

    let outcome = run_crawler(config, fetcher)?;

    if config.output.console_report {
        write_failure_report(io::stdout().lock(), &outcome.failures)?;
    }

    // The CSV goes last so a failed review file leaves no finished CSV behind.
    if let Some(path) = &config.output.failures_file {
        write_failures_json(path, &outcome.failures)?;
    }
    write_records_csv(&config.output.csv_file, &outcome.records)?;

    Ok(RunSummary {
        years: config.years.len(),
        records: outcome.records.len(),
        failures: outcome.failures.len(),
        csv_path: config.output.csv_file.clone(),
        failures_path: config.output.failures_file.clone(),
    })
}
