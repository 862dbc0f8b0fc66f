// src/services/parser.rs

//! Dissertation entry parser.
//!
//! Entries look like
//! `Amor, Joe, Jr., “Defying Structures” (CUNY, A. Chave)` but are typed by
//! hand, so the pattern tolerates mixed quote glyphs, a missing comma before
//! the title and a missing closing parenthesis.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedEntry;
use crate::utils::normalize_whitespace;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"(?xs)
        \A \s*
        (?P<last>[^,]+) ,
        \s*
        # Keeps a trailing comma and whitespace; stripped afterwards.
        (?P<first>[^“”«»"]+)
        \s*
        # Any quote glyph opens or closes; titles may contain quotes too.
        [“”«»"] (?P<title>.+) [“”«»"]
        \s*
        \( \s* (?P<institution>[^,]+) ,
        \s*
        # Closing parenthesis is often missing.
        (?P<advisor>[^)]+) \)?
        \s* \z
        "##,
    )
    .expect("valid entry regex")
});

/// Result of parsing one flattened paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Whitespace only; neither an entry nor a failure
    Blank,
    /// All five fields extracted
    Entry(ParsedEntry),
    /// Text does not look like an entry
    NoMatch,
}

/// Parse a flattened dissertation paragraph.
pub fn parse_entry(text: &str) -> ParseOutcome {
    if text.trim().is_empty() {
        return ParseOutcome::Blank;
    }

    let Some(caps) = ENTRY.captures(text) else {
        return ParseOutcome::NoMatch;
    };

    let first = caps["first"].trim_end();
    let first = first.strip_suffix(',').unwrap_or(first);

    let entry = ParsedEntry {
        last_name: normalize_whitespace(&caps["last"]),
        first_name: normalize_whitespace(first),
        title: normalize_whitespace(&caps["title"]),
        institution: normalize_whitespace(&caps["institution"]),
        advisor: normalize_whitespace(&caps["advisor"]),
    };

    let fields = [
        &entry.last_name,
        &entry.first_name,
        &entry.title,
        &entry.institution,
        &entry.advisor,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return ParseOutcome::NoMatch;
    }

    ParseOutcome::Entry(entry)
}
