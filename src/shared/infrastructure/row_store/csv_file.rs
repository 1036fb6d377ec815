// CSV file implementation of the RowStore port.
//
// Responsibilities
// - Create the file (and its parent directory) with the header row on first use.
// - Append one CSV record per row; read every record back as text cells.
//
// Appends from this process are serialised by a mutex. Other processes writing the
// same file are not coordinated with.

use crate::shared::infrastructure::row_store::{CellValue, Row, RowStore, RowStoreError};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CsvRowStore {
    path: PathBuf,
    header: Vec<String>,
    lock: Arc<Mutex<()>>,
}

impl CsvRowStore {
    pub fn new(path: impl Into<PathBuf>, header: &[&str]) -> Self {
        Self {
            path: path.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes the header when the file is missing or still empty.
fn ensure_file(path: &Path, header: &[String]) -> Result<(), RowStoreError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.len() > 0 => return Ok(()),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "created registration table");
    Ok(())
}

fn append_blocking(path: &Path, header: &[String], fields: Row) -> Result<(), RowStoreError> {
    ensure_file(path, header)?;
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(fields.iter().map(CellValue::to_text))?;
    writer.flush()?;
    Ok(())
}

fn read_blocking(path: &Path, header: &[String]) -> Result<Vec<Row>, RowStoreError> {
    ensure_file(path, header)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::text).collect());
    }
    Ok(rows)
}

#[async_trait::async_trait]
impl RowStore for CsvRowStore {
    async fn append_record(&self, fields: Row) -> Result<(), RowStoreError> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        let header = self.header.clone();
        tokio::task::spawn_blocking(move || append_blocking(&path, &header, fields))
            .await
            .map_err(|e| RowStoreError::Backend(e.to_string()))?
    }

    async fn read_all_records(&self) -> Result<Vec<Row>, RowStoreError> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        let header = self.header.clone();
        tokio::task::spawn_blocking(move || read_blocking(&path, &header))
            .await
            .map_err(|e| RowStoreError::Backend(e.to_string()))?
    }
}
