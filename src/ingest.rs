//! Ingestion pipeline: archive -> records -> transactional insert -> stats.

use tokio::task;

use crate::archive;
use crate::error::{Result, ServiceError};
use crate::models::{IngestStats, PriceRecord};
use crate::records;
use crate::storage::Storage;

/// Ingest an uploaded archive.
///
/// All rows are decoded before the transaction opens. Either every record
/// is persisted and the call reports stats, or the transaction rolls back
/// and none are.
pub async fn ingest(storage: &Storage, body: Vec<u8>) -> Result<IngestStats> {
    let records = decode(body).await?;

    let mut tx = storage.begin().await?;
    for record in &records {
        Storage::insert_record(&mut tx, record).await?;
    }
    let (total_categories, total_price) = Storage::global_stats(&mut tx).await?;
    tx.commit().await?;

    Ok(IngestStats {
        total_items: records.len() as i64,
        total_categories,
        total_price,
    })
}

/// Unzip and parse on the blocking pool; zip and CSV decoding are CPU-bound.
async fn decode(body: Vec<u8>) -> Result<Vec<PriceRecord>> {
    task::spawn_blocking(move || {
        let csv = archive::extract_csv(&body)?;
        records::parse_records(csv.as_slice())
    })
    .await
    .map_err(|e| ServiceError::Task(format!("decode task: {e}")))?
}
