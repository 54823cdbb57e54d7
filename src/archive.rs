//! Zip archive codec for the CSV transfer pipeline.
//!
//! Inbound uploads are staged into a spooled temporary file (memory up to a
//! threshold, disk beyond it) before the zip directory is read. The staging
//! file is owned by the archive reader and removed when it drops, on every
//! exit path.

use std::io::{Cursor, Read, Seek, SeekFrom, Write};

use tempfile::SpooledTempFile;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{Result, ServiceError};

/// Uploads up to this size are staged in memory; larger ones spill to disk.
const SPOOL_THRESHOLD: usize = 8 * 1024 * 1024;

/// Entry name used for the CSV payload in packaged archives.
pub const CSV_ENTRY_NAME: &str = "data.csv";

/// Extract the first `.csv` entry from a zip archive.
///
/// Entries are scanned in archive order and matched on the entry name with
/// any directory path stripped, so `data/prices.csv` qualifies. Returns the
/// entry's bytes.
///
/// Fails with [`ServiceError::MalformedArchive`] when the bytes are not a
/// zip archive and [`ServiceError::CsvNotFound`] when no entry matches.
pub fn extract_csv(archive: &[u8]) -> Result<Vec<u8>> {
    let mut staged = SpooledTempFile::new(SPOOL_THRESHOLD);
    staged.write_all(archive)?;
    staged.seek(SeekFrom::Start(0))?;

    let mut zip = ZipArchive::new(staged)?;

    let index = (0..zip.len())
        .find(|&i| {
            zip.name_for_index(i)
                .map(|name| {
                    let base = name.rsplit('/').next().unwrap_or(name);
                    base.ends_with(".csv")
                })
                .unwrap_or(false)
        })
        .ok_or(ServiceError::CsvNotFound)?;

    let mut entry = zip.by_index(index)?;
    let mut payload = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut payload)?;
    Ok(payload)
}

/// Package a CSV payload as a zip archive with a single deflated entry
/// named `data.csv`, ready to stream as a response body.
pub fn package_csv(csv: &[u8]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file(CSV_ENTRY_NAME, SimpleFileOptions::default())?;
    zip.write_all(csv)?;
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
