//! CSV export of session entries. Uses the `csv` crate for safe quoting.
//!
//! One file per export: `<dir>/reflect_<YYYYmmdd_HHMMSS>.csv`. Nothing is read back.

use crate::domain::{DomainError, JournalEntry};
use crate::ports::ExportPort;
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Convert entries to a CSV string.
///
/// Format: `timestamp,emotion,score,text`, timestamps in RFC 3339, text unmodified.
pub fn entries_to_csv(entries: &[JournalEntry]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["timestamp", "emotion", "score", "text"])?;

    for entry in entries {
        wtr.write_record([
            entry.timestamp().to_rfc3339().as_str(),
            entry.emotion().label(),
            entry.score().to_string().as_str(),
            entry.text(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

/// Writes session snapshots as CSV files into a directory.
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ExportPort for CsvExporter {
    async fn export(&self, entries: &[JournalEntry]) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Export(format!("create export dir: {}", e)))?;

        let csv = entries_to_csv(entries)
            .map_err(|e| DomainError::Export(format!("generate CSV: {}", e)))?;

        let filename = format!("reflect_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
        let path = self.dir.join(filename);
        fs::write(&path, csv)
            .await
            .map_err(|e| DomainError::Export(format!("write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), entries = entries.len(), "session exported");
        Ok(path)
    }
}
