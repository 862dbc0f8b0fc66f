// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod record;

// Re-export all public types
pub use config::{Config, CrawlerConfig, OutputConfig, SiteConfig, YearRange};
pub use record::{
    CrawlOutcome, DissertationRecord, ParseFailure, ParsedEntry, SubjectExtraction, SubjectLink,
};
