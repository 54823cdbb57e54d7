#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("open archive: {0}")]
    MalformedArchive(#[from] zip::result::ZipError),

    #[error("no .csv entry found in archive")]
    CsvNotFound,

    #[error("row {row}: expected at least 5 columns, got {columns}")]
    RowShape { row: usize, columns: usize },

    #[error("row {row}: invalid price {value:?}: {source}")]
    FieldParse {
        row: usize,
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("encode response: {0}")]
    Serialization(String),

    #[error("list prices: {0}")]
    UpstreamQuery(#[source] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration: {0}")]
    Config(String),

    #[error("blocking task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
