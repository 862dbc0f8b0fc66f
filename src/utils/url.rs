// src/utils/url.rs

//! URL manipulation utilities.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::Result;

/// Href shape of a "completed dissertations by subject" page.
static COMPLETED_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dissertations/[0-9]+/completed$").expect("valid regex"));

/// Resolve a potentially relative href against a base URL.
///
/// # Examples
/// ```
/// use dissertations::utils::url::resolve;
///
/// assert_eq!(
///     resolve("http://www.caareviews.org", "/dissertations/426/completed").unwrap(),
///     "http://www.caareviews.org/dissertations/426/completed"
/// );
/// ```
pub fn resolve(base: &str, href: &str) -> Result<String> {
    Ok(Url::parse(base)?.join(href)?.to_string())
}

/// Whether `href` points at a subject's completed-dissertations page.
pub fn is_completed_subject_href(href: &str) -> bool {
    COMPLETED_SUBJECT.is_match(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve("http://example.com/some/page", "/dissertations/1/completed").unwrap(),
            "http://example.com/dissertations/1/completed"
        );
    }

    #[test]
    fn test_resolve_absolute_url() {
        assert_eq!(
            resolve("http://example.com", "https://other.com/page").unwrap(),
            "https://other.com/page"
        );
    }

    #[test]
    fn test_resolve_invalid_base() {
        assert!(resolve("not a url", "/x").is_err());
    }

    #[test]
    fn test_completed_subject_href() {
        assert!(is_completed_subject_href("/dissertations/426/completed"));
        assert!(is_completed_subject_href(
            "http://www.caareviews.org/dissertations/485/completed"
        ));
        assert!(!is_completed_subject_href("/dissertations/426/in_progress"));
        assert!(!is_completed_subject_href("/dissertations/year/2004/completed"));
        assert!(!is_completed_subject_href("/dissertations/426/completed/extra"));
    }
}
