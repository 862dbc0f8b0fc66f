//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Site being crawled
    #[serde(default)]
    pub site: SiteConfig,

    /// Inclusive range of years to crawl
    #[serde(default)]
    pub years: YearRange,

    /// Output artifacts
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load a configuration file the user asked for explicitly.
    ///
    /// Unlike [`Config::load_or_default`], a missing or malformed file is an
    /// error rather than a silent fallback.
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::load(path)
            .map_err(|e| AppError::config(format!("cannot load {}: {e}", path.display())))
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }

        let base = url::Url::parse(&self.site.base_url)
            .map_err(|e| AppError::validation(format!("site.base_url is invalid: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(
                "site.base_url must be an http(s) URL",
            ));
        }

        if self.years.start > self.years.end {
            return Err(AppError::validation(format!(
                "years.start ({}) is after years.end ({})",
                self.years.start, self.years.end
            )));
        }
        if self.output.csv_file.as_os_str().is_empty() {
            return Err(AppError::validation("output.csv_file is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Fixed pause after every request in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: 0,
        }
    }
}

/// Location of the listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host every listing path is rooted at
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
        }
    }
}

impl SiteConfig {
    /// URL of the completed-dissertations listing for one year.
    pub fn year_url(&self, year: u16) -> String {
        format!(
            "{}/dissertations/year/{}/completed",
            self.base_url.trim_end_matches('/'),
            year
        )
    }
}

/// Inclusive year range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    #[serde(default = "defaults::start_year")]
    pub start: u16,
    #[serde(default = "defaults::end_year")]
    pub end: u16,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: defaults::start_year(),
            end: defaults::end_year(),
        }
    }
}

impl YearRange {
    /// Iterate every year in the range, both ends included.
    pub fn iter(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }

    /// Number of years covered.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file receiving one row per parsed dissertation
    #[serde(default = "defaults::csv_file")]
    pub csv_file: PathBuf,

    /// Optional JSON file listing entries that failed to parse
    #[serde(default)]
    pub failures_file: Option<PathBuf>,

    /// Print the failure report to stdout once crawling is done
    #[serde(default = "defaults::console_report")]
    pub console_report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_file: defaults::csv_file(),
            failures_file: None,
            console_report: defaults::console_report(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; dissertations/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn base_url() -> String {
        "http://www.caareviews.org".into()
    }

    pub fn start_year() -> u16 {
        2004
    }
    pub fn end_year() -> u16 {
        2018
    }

    pub fn csv_file() -> PathBuf {
        PathBuf::from("caa.csv")
    }
    pub fn console_report() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_year_range_covers_2004_through_2018() {
        let years = Config::default().years;
        assert_eq!(years.iter().next(), Some(2004));
        assert_eq!(years.iter().last(), Some(2018));
        assert_eq!(years.len(), 15);
    }

    #[test]
    fn validate_rejects_inverted_year_range() {
        let mut config = Config::default();
        config.years = YearRange {
            start: 2010,
            end: 2009,
        };
        assert!(config.years.is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.site.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.site.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_field_defaults() {
        let config: Config = toml::from_str(
            r#"
            [years]
            start = 2010

            [output]
            failures_file = "failed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.years.start, 2010);
        assert_eq!(config.years.end, 2018);
        assert_eq!(config.output.csv_file, PathBuf::from("caa.csv"));
        assert_eq!(
            config.output.failures_file,
            Some(PathBuf::from("failed.json"))
        );
        assert!(config.output.console_report);
    }

    #[test]
    fn year_url_ignores_trailing_slash() {
        let site = SiteConfig {
            base_url: "http://example.com/".to_string(),
        };
        assert_eq!(
            site.year_url(2004),
            "http://example.com/dissertations/year/2004/completed"
        );
    }

    #[test]
    fn load_required_rejects_malformed_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[years]\nstart = \"twenty\"\n").unwrap();

        let err = Config::load_required(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn load_required_rejects_missing_file() {
        assert!(matches!(
            Config::load_required("/nonexistent/config.toml"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn load_required_reads_valid_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[years]\nstart = 2010\nend = 2012\n").unwrap();

        let config = Config::load_required(&path).unwrap();
        assert_eq!(config.years, YearRange { start: 2010, end: 2012 });
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.years, YearRange::default());
    }
}
