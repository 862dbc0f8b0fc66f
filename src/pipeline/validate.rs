// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and log the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    match config.validate() {
        Ok(()) => {
            log::info!("Config OK");
            log::info!("    Base URL: {}", config.site.base_url);
            log::info!(
                "    Years: {} through {} ({} pages)",
                config.years.start,
                config.years.end,
                config.years.len()
            );
            log::info!("    User agent: {}", config.crawler.user_agent);
            log::info!("    Timeout: {}s", config.crawler.timeout_secs);
            log::info!("    CSV output: {}", config.output.csv_file.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Config validation failed: {e}");
            Err(e)
        }
    }
}
