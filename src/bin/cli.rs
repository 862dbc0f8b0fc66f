//! CAA Reviews dissertation crawler CLI
//!
//! Crawls the completed-dissertation listings year by year and writes one CSV
//! row per dissertation. Entries that cannot be parsed are printed for manual
//! review.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dissertations::{error::Result, models::Config, pipeline, utils::http::HttpFetcher};

const DEFAULT_CONFIG: &str = "config.toml";

/// Completed dissertations crawler
#[derive(Parser, Debug)]
#[command(
    name = "dissertations",
    version,
    about = "Crawls CAA Reviews completed dissertations into a CSV file"
)]
struct Cli {
    /// Path to the TOML configuration file (default: config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl every year in the range and write the CSV file
    Crawl {
        /// First year to crawl (inclusive)
        #[arg(long)]
        start_year: Option<u16>,

        /// Last year to crawl (inclusive)
        #[arg(long)]
        end_year: Option<u16>,

        /// CSV output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // An explicitly named file must load; the implicit one may fall back.
    let mut config = match &cli.config {
        Some(path) => Config::load_required(path)?,
        None => Config::load_or_default(DEFAULT_CONFIG),
    };

    match cli.command {
        Command::Crawl {
            start_year,
            end_year,
            output,
        } => {
            if let Some(year) = start_year {
                config.years.start = year;
            }
            if let Some(year) = end_year {
                config.years.end = year;
            }
            if let Some(path) = output {
                config.output.csv_file = path;
            }
            config.validate()?;

            let fetcher = HttpFetcher::new(&config.crawler)?;
            let summary = pipeline::run(&config, &fetcher).inspect_err(|e| {
                log::error!("Crawl aborted, no output written: {e}");
            })?;

            log::info!("[SUMMARY] Crawl complete");
            log::info!("    Years crawled: {}", summary.years);
            log::info!("    Records written: {}", summary.records);
            log::info!("    Unparsed entries: {}", summary.failures);
            log::info!("    CSV: {}", summary.csv_path.display());
            if let Some(path) = &summary.failures_path {
                log::info!("    Failures: {}", path.display());
            }
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    Ok(())
}
