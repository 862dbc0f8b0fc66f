// src/services/subjects.rs

//! Subject page extraction.
//!
//! A subject page looks like this:
//!
//! ```text
//! <div class="center-panel">
//!   <h1>African Art (sub-Saharan) ...</h1>
//!   <div class="content">
//!     <p><a href="/dissertations/178/in_progress">Show in progress dissertations</a></p>
//!     <p>Adams, Sarah, “Hand to Hand: ...” (Yale, R. Thompson)</p>
//!     ...
//!   </div>
//! </div>
//! ```
//!
//! The first paragraph is checked strictly so a template change cannot make
//! us silently skip a dissertation.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::SubjectExtraction;
use crate::services::flatten::flatten_paragraph;
use crate::services::parser::{ParseOutcome, parse_entry};
use crate::utils::parse_selector;

/// Extract every dissertation entry from a subject page.
///
/// Unparseable paragraphs are returned as failures. Any deviation from the
/// page template is a structural error.
pub fn extract_subject(page: &Html, expected_in_progress_href: &str) -> Result<SubjectExtraction> {
    let panel_sel = parse_selector("div.center-panel")?;
    let content_sel = parse_selector("div.content")?;
    let paragraph_sel = parse_selector("p")?;

    let panel = exactly_one(page.select(&panel_sel), "div.center-panel")?;
    let content = exactly_one(panel.select(&content_sel), "div.content")?;

    let paragraphs: Vec<ElementRef> = content.select(&paragraph_sel).collect();
    let Some((first, entries)) = paragraphs.split_first() else {
        return Err(AppError::structure("content region has no paragraphs"));
    };
    check_in_progress_link(*first, expected_in_progress_href)?;

    let mut extraction = SubjectExtraction::default();
    for paragraph in entries {
        let text = flatten_paragraph(*paragraph, 0)?;
        match parse_entry(&text) {
            ParseOutcome::Blank => {}
            ParseOutcome::Entry(entry) => extraction.entries.push(entry),
            ParseOutcome::NoMatch => {
                log::debug!("Entry did not match: {}", text.trim());
                extraction.failures.push(text);
            }
        }
    }

    Ok(extraction)
}

fn exactly_one<'a>(
    mut found: impl Iterator<Item = ElementRef<'a>>,
    what: &str,
) -> Result<ElementRef<'a>> {
    match (found.next(), found.next()) {
        (Some(element), None) => Ok(element),
        (None, _) => Err(AppError::structure(format!("no {what} element found"))),
        (Some(_), Some(_)) => Err(AppError::structure(format!(
            "more than one {what} element found"
        ))),
    }
}

/// The first paragraph must be exactly `<p><a href="...">label</a></p>`.
fn check_in_progress_link(paragraph: ElementRef<'_>, expected_href: &str) -> Result<()> {
    let mut children = paragraph.children();
    let (Some(only_child), None) = (children.next(), children.next()) else {
        return Err(AppError::structure(
            "first paragraph does not have exactly one child",
        ));
    };

    let anchor = ElementRef::wrap(only_child)
        .filter(|e| e.value().name() == "a")
        .ok_or_else(|| AppError::structure("in-progress element is not an <a> element"))?;

    if anchor.children().count() != 1 {
        return Err(AppError::structure(
            "in-progress anchor does not have exactly one child",
        ));
    }

    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| AppError::structure("in-progress anchor has no href"))?;
    if href != expected_href {
        return Err(AppError::structure(format!(
            "in-progress link is {href:?}, expected {expected_href:?}"
        )));
    }

    Ok(())
}
