//! Dissertation record data structures.

use serde::{Deserialize, Serialize};

/// The five fields parsed out of one dissertation paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub last_name: String,
    pub first_name: String,
    pub title: String,
    pub institution: String,
    pub advisor: String,
}

impl ParsedEntry {
    /// Attach the subject and year the entry was listed under.
    pub fn into_record(self, subject: &str, year: u16) -> DissertationRecord {
        DissertationRecord {
            last_name: self.last_name,
            first_name: self.first_name,
            title: self.title,
            institution: self.institution,
            advisor: self.advisor,
            subject: subject.to_string(),
            year,
        }
    }
}

/// One completed dissertation, as written to the CSV file.
///
/// Field order and serde names define the CSV column order and header row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DissertationRecord {
    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Institution")]
    pub institution: String,

    #[serde(rename = "Advisor")]
    pub advisor: String,

    #[serde(rename = "Subject")]
    pub subject: String,

    #[serde(rename = "Year")]
    pub year: u16,
}

/// A paragraph that did not match the entry pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseFailure {
    pub year: u16,
    pub subject: String,
    pub raw_text: String,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.year, self.subject, self.raw_text)
    }
}

/// A subject link found on a year-listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectLink {
    /// Visible link text
    pub subject: String,

    /// The href exactly as it appears in the page
    pub href: String,

    /// The href resolved against the site base URL
    pub url: String,
}

impl SubjectLink {
    /// The href the subject page's in-progress link must carry.
    pub fn expected_in_progress_href(&self) -> String {
        self.href.replace("completed", "in_progress")
    }
}

/// Entries and unparseable texts from one subject page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubjectExtraction {
    pub entries: Vec<ParsedEntry>,
    pub failures: Vec<String>,
}

/// Records and failures gathered by a crawl, in encounter order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub records: Vec<DissertationRecord>,
    pub failures: Vec<ParseFailure>,
}

impl CrawlOutcome {
    /// Append another outcome, keeping encounter order.
    pub fn extend(&mut self, other: CrawlOutcome) {
        self.records.extend(other.records);
        self.failures.extend(other.failures);
    }
}
