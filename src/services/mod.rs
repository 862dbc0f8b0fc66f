//! Service layer for the crawler application.
//!
//! This module contains the extraction logic, leaf to root:
//! - Paragraph flattening (`flatten_paragraph`)
//! - Entry parsing (`parse_entry`)
//! - Subject page extraction (`extract_subject`)
//! - Year page crawling (`YearCrawler`)

pub mod flatten;
pub mod parser;
pub mod subjects;
pub mod years;

pub use flatten::flatten_paragraph;
pub use parser::{ParseOutcome, parse_entry};
pub use subjects::extract_subject;
pub use years::YearCrawler;
