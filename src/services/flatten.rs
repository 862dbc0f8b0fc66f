// src/services/flatten.rs

//! Paragraph flattening.
//!
//! A dissertation `<p>` may carry inline formatting. Flattening turns it into
//! the plain text it displays and rejects anything that is not formatting.

use scraper::{ElementRef, Node};

use crate::error::{AppError, Result};

/// Inline elements allowed anywhere inside a paragraph.
const FORMATTING_TAGS: &[&str] = &["i", "br"];

/// Flatten `element` and its descendants into plain text.
///
/// `depth` is 0 for the paragraph itself. A `p` is only accepted there;
/// any element other than `i` or `br` below it is a structural error.
pub fn flatten_paragraph(element: ElementRef<'_>, depth: usize) -> Result<String> {
    let name = element.value().name();
    let permitted = FORMATTING_TAGS.contains(&name) || (name == "p" && depth == 0);
    if !permitted {
        return Err(AppError::structure(format!(
            "paragraph child element not a formatting element: <{name}>"
        )));
    }

    let mut text = String::new();
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            text.push_str(&flatten_paragraph(child_element, depth + 1)?);
        } else if let Node::Text(leaf) = child.value() {
            text.push_str(leaf);
        }
        // Comments and processing instructions carry no visible text.
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn flatten_first_p(html: &str) -> Result<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("p").unwrap();
        let paragraph = fragment.select(&selector).next().unwrap();
        flatten_paragraph(paragraph, 0)
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Adams, Sarah, “Hand to Hand” (Yale, R. Thompson)";
        assert_eq!(flatten_first_p(&format!("<p>{text}</p>")).unwrap(), text);
    }

    #[test]
    fn test_italic_is_inlined() {
        let flat = flatten_first_p("<p>Doe, Jane, <i>“Title”</i> (NYU, X)</p>").unwrap();
        assert_eq!(flat, "Doe, Jane, “Title” (NYU, X)");
        assert!(!flat.contains('<'));
    }

    #[test]
    fn test_nested_italics() {
        let flat = flatten_first_p("<p><i>a <i>b</i> c</i></p>").unwrap();
        assert_eq!(flat, "a b c");
    }

    #[test]
    fn test_stray_line_break_is_empty() {
        assert_eq!(flatten_first_p("<p>ab<br>cd</p>").unwrap(), "abcd");
        assert_eq!(flatten_first_p("<p><br></p>").unwrap(), "");
    }

    #[test]
    fn test_comment_contributes_nothing() {
        assert_eq!(flatten_first_p("<p>a<!-- note -->b</p>").unwrap(), "ab");
    }

    #[test]
    fn test_unsupported_element_names_tag() {
        let err = flatten_first_p("<p>Doe, <span>Jane</span></p>").unwrap_err();
        assert!(err.is_structural());
        assert!(err.to_string().contains("<span>"));
    }

    #[test]
    fn test_paragraph_rejected_below_top_level() {
        let fragment = Html::parse_fragment("<p>text</p>");
        let selector = Selector::parse("p").unwrap();
        let paragraph = fragment.select(&selector).next().unwrap();

        let err = flatten_paragraph(paragraph, 1).unwrap_err();
        assert!(err.to_string().contains("<p>"));
    }
}
