//! Shared fixtures for the prices-api integration tests.
//!
//! Provides in-memory builders for the upload wire format: CSV payloads and
//! zip archives holding them.
#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// CSV payload matching the upload contract: a header row, then
/// `id,name,category,price,created_at` data rows.
pub const SAMPLE_CSV: &str = "id,name,category,price,created_at\n\
                              1,Widget,Tools,9.99,2024-01-01\n\
                              2,Gadget,Tools,19.5,2024-01-02\n";

/// Build a zip archive holding the given named entries, in order.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Zip archive holding [`SAMPLE_CSV`] as `prices.csv`.
pub fn sample_archive() -> Vec<u8> {
    build_zip(&[("prices.csv", SAMPLE_CSV.as_bytes())])
}
