// In memory implementation of the RowStore port.
//
// Purpose
// - Support handler tests and local development without a backing file.

use crate::shared::infrastructure::row_store::{CellValue, Row, RowStore, RowStoreError};
use tokio::sync::RwLock;

pub struct InMemoryRowStore {
    header: Row,
    rows: RwLock<Vec<Row>>,
    offline: bool,
}

impl InMemoryRowStore {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| CellValue::text(*h)).collect(),
            rows: RwLock::new(Vec::new()),
            offline: false,
        }
    }

    /// Seeds raw rows after the header, bypassing the append path.
    pub async fn seed(&self, rows: Vec<Row>) {
        let mut guard = self.rows.write().await;
        self.ensure_header(&mut guard);
        guard.extend(rows);
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_header(&self, rows: &mut Vec<Row>) {
        if rows.is_empty() {
            rows.push(self.header.clone());
        }
    }

    fn check_online(&self) -> Result<(), RowStoreError> {
        if self.offline {
            return Err(RowStoreError::Backend("Row store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RowStore for InMemoryRowStore {
    async fn append_record(&self, fields: Row) -> Result<(), RowStoreError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        self.ensure_header(&mut guard);
        guard.push(fields);
        Ok(())
    }

    async fn read_all_records(&self) -> Result<Vec<Row>, RowStoreError> {
        self.check_online()?;
        {
            let guard = self.rows.read().await;
            if !guard.is_empty() {
                return Ok(guard.clone());
            }
        }
        let mut guard = self.rows.write().await;
        self.ensure_header(&mut guard);
        Ok(guard.clone())
    }
}
