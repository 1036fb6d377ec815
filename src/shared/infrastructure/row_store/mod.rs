// Row store port: an append-only table whose first row is a fixed header.
//
// Purpose
// - Persist registration rows without the use cases knowing where they live.
//
// Boundaries
// - No update or delete. Readers get every row, header included, in append order.
// - No locking across processes. Two writers appending at once are serialised only
//   by whatever the backend guarantees.

pub mod csv_file;
pub mod in_memory;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Flat text form, as a spreadsheet export would write the cell.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Timestamp(ts) => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub type Row = Vec<CellValue>;

#[async_trait]
pub trait RowStore: Send + Sync {
    async fn append_record(&self, fields: Row) -> Result<(), RowStoreError>;
    async fn read_all_records(&self) -> Result<Vec<Row>, RowStoreError>;
}
