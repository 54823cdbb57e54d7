//! CSV row decoding into [`PriceRecord`]s.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{Result, ServiceError};
use crate::models::PriceRecord;

/// Columns every data row must carry: id, name, category, price, created_at.
/// The id column is ignored; the store assigns identity.
const MIN_COLUMNS: usize = 5;

/// Decode CSV data into price records.
///
/// The first row is always discarded, whatever it contains. Decoding stops
/// at the first malformed row; there is no partial output and no skipping.
pub fn parse_records<R: Read>(input: R) -> Result<Vec<PriceRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    // An entirely empty payload has no first row to discard.
    if reader.headers()?.is_empty() {
        return Err(ServiceError::RowShape { row: 0, columns: 0 });
    }

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let number = i + 1;
        if row.len() < MIN_COLUMNS {
            return Err(ServiceError::RowShape {
                row: number,
                columns: row.len(),
            });
        }

        let price: f64 = row[3].parse().map_err(|source| ServiceError::FieldParse {
            row: number,
            value: row[3].to_string(),
            source,
        })?;

        records.push(PriceRecord {
            name: row[1].to_string(),
            category: row[2].to_string(),
            price,
            created_at: row[4].to_string(),
        });
    }

    Ok(records)
}
