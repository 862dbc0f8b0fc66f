// src/storage/records.rs

//! CSV output.
//!
//! Spreadsheet tools only pick UTF-8 when the file starts with a BOM, so one
//! is always written. Every text field is quoted, even when it looks like a
//! number; the year is left bare.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::models::DissertationRecord;

use super::write_bytes;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row, in column order.
pub const HEADERS: [&str; 7] = [
    "Last Name",
    "First Name",
    "Title",
    "Institution",
    "Advisor",
    "Subject",
    "Year",
];

/// Wrap a text field in quotes, doubling any quote inside it.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Encode records as CSV bytes, BOM and header included.
///
/// Every text field is quoted, even `1968` or `Nan`; only the year is bare.
pub fn encode_records(records: &[DissertationRecord]) -> Result<Vec<u8>> {
    let mut buf = UTF8_BOM.to_vec();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::CRLF)
            .from_writer(&mut buf);

        writer.write_record(HEADERS.map(quoted))?;
        for record in records {
            writer.write_record([
                quoted(&record.last_name),
                quoted(&record.first_name),
                quoted(&record.title),
                quoted(&record.institution),
                quoted(&record.advisor),
                quoted(&record.subject),
                record.year.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Write all records to `path`.
pub fn write_records_csv(path: &Path, records: &[DissertationRecord]) -> Result<()> {
    let bytes = encode_records(records)?;
    write_bytes(path, &bytes)?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
