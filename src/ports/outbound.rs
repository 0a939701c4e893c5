//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. The model is split into three independent
//! capabilities so each can be loaded, replaced or faked on its own.

use crate::domain::{DomainError, FeatureVector, InternalLabel, JournalEntry};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Turns normalized text into features. Deterministic for a loaded artifact.
pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, text: &str) -> FeatureVector;
}

/// Maps features to exactly one internal label. Tie-breaking is the implementor's business.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> InternalLabel;
}

/// Maps internal labels to human-readable emotion labels.
pub trait LabelDecoder: Send + Sync {
    /// Returns `DomainError::Model` for a label outside the decoder's range.
    fn decode_label(&self, label: InternalLabel) -> Result<String, DomainError>;
}

/// Wall-clock source for entry timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Export port. Writes a snapshot of session entries somewhere outside the process.
#[async_trait::async_trait]
pub trait ExportPort: Send + Sync {
    /// Export entries (oldest first). Returns the location written.
    async fn export(&self, entries: &[JournalEntry]) -> Result<PathBuf, DomainError>;
}
