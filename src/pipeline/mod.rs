//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Crawl every configured year into records and failures
//! - `run`: Crawl, print the failure report and write the output files
//! - `run_validate`: Check configuration

pub mod crawl;
pub mod run;
pub mod validate;

pub use crawl::run_crawler;
pub use run::{RunSummary, run};
pub use validate::run_validate;
