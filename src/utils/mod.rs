//! Utility functions and helpers.

pub mod http;
pub mod url;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping the parser error into [`AppError`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.center-panel").is_ok());
        assert!(parse_selector("a[href]").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  c "), "a b c");
        assert_eq!(normalize_whitespace(" \n "), "");
    }
}
