//! Output artifacts.
//!
//! Nothing here is called until the whole crawl has succeeded, so an aborted
//! run never leaves output behind.
//!
//! ```text
//! caa.csv          # one row per dissertation, UTF-8 with BOM
//! failures.json    # optional, entries that did not parse
//! ```

pub mod records;
pub mod report;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::ParseFailure;

pub use self::records::{HEADERS, encode_records, write_records_csv};
pub use self::report::write_failure_report;

/// Write bytes atomically (write to temp, then rename).
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(bytes)?;
    file.flush()?;
    drop(file);

    fs::rename(&tmp, path)?;
    Ok(())
}

/// Write JSON data.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_bytes(path, &bytes)
}

/// Save the unparsed entries for later review.
pub fn write_failures_json(path: &Path, failures: &[ParseFailure]) -> Result<()> {
    write_json(path, failures)
}
