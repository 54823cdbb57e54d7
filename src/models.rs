use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceRecord — one parsed CSV row, not yet persisted
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Raw text from the upload; not date-validated.
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// StoredPrice — a persisted row, identity assigned by the store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredPrice {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// IngestStats — aggregate statistics reported after an ingestion call
// ---------------------------------------------------------------------------

/// `total_items` counts the rows inserted by this call; `total_categories`
/// and `total_price` reflect the whole stored table at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestStats {
    pub total_items: i64,
    pub total_categories: i64,
    pub total_price: f64,
}
