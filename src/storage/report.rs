//! Console report of entries that could not be parsed.

use std::io::{self, Write};

use crate::models::ParseFailure;

/// Print every failure, one per line, for manual review.
pub fn write_failure_report<W: Write>(mut out: W, failures: &[ParseFailure]) -> io::Result<()> {
    writeln!(out, "Dissertations that were unable to be parsed:")?;
    for failure in failures {
        writeln!(out, "    {failure}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_failure() {
        let failures = vec![
            ParseFailure {
                year: 2004,
                subject: "Africa".to_string(),
                raw_text: "Doe, Jane".to_string(),
            },
            ParseFailure {
                year: 2005,
                subject: "Baroque".to_string(),
                raw_text: "Roe, Richard (Yale)".to_string(),
            },
        ];
        let mut out = Vec::new();

        write_failure_report(&mut out, &failures).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dissertations that were unable to be parsed:\n\
             \x20   2004 | Africa | Doe, Jane\n\
             \x20   2005 | Baroque | Roe, Richard (Yale)\n"
        );
    }
}
