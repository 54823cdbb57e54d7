//! Export pipeline: full-table query -> CSV -> zip.

use crate::archive;
use crate::error::{Result, ServiceError};
use crate::models::StoredPrice;
use crate::storage::Storage;

/// File name advertised in the `Content-Disposition` header.
pub const ARCHIVE_FILE_NAME: &str = "prices.zip";

/// Header row of the exported CSV.
const CSV_HEADER: [&str; 5] = ["id", "created_at", "name", "category", "price"];

/// Export every stored price as a zip archive holding `data.csv`.
///
/// A failure of the listing query surfaces as
/// [`ServiceError::UpstreamQuery`]; later serialization failures keep their
/// own classes.
pub async fn export(storage: &Storage) -> Result<Vec<u8>> {
    let rows = storage
        .fetch_all()
        .await
        .map_err(ServiceError::UpstreamQuery)?;
    let csv = write_csv(&rows)?;
    archive::package_csv(&csv)
}

/// Serialize rows as CSV: header line plus one line per record.
///
/// `id` and `price` use the shortest decimal representation that
/// round-trips, with no fixed precision and no trailing zeros. An empty
/// table yields only the header line.
pub fn write_csv(rows: &[StoredPrice]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([
            row.id.to_string(),
            row.created_at.clone(),
            row.name.clone(),
            row.category.clone(),
            row.price.to_string(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| ServiceError::Serialization(format!("flush CSV writer: {e}")))
}
