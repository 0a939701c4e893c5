//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A model artifact could not be read, parsed or validated. Fatal at startup.
    #[error("Artifact '{name}' failed to load: {reason}")]
    Artifact { name: String, reason: String },

    /// The loaded model produced something it should not (e.g. an undecodable label).
    #[error("Model error: {0}")]
    Model(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn artifact(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Artifact {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
