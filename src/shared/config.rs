//! Application configuration. Model artifact locations, export directory.

use crate::adapters::model::ArtifactPaths;
use crate::domain::DomainError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_DIR: &str = "./models";
pub const DEFAULT_EXPORT_DIR: &str = "./exports";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding vectorizer.json, classifier.json and label_encoder.json. Read from REFLECT_MODEL_DIR.
    #[serde(default)]
    pub model_dir: Option<String>,

    /// Per-artifact overrides. Read from REFLECT_VECTORIZER_PATH etc.
    #[serde(default)]
    pub vectorizer_path: Option<String>,
    #[serde(default)]
    pub classifier_path: Option<String>,
    #[serde(default)]
    pub label_encoder_path: Option<String>,

    /// Use the keyword mock model instead of artifacts. Read from REFLECT_USE_MOCK_MODEL.
    #[serde(default)]
    pub use_mock_model: Option<bool>,

    /// Where CSV exports go. Read from REFLECT_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl AppConfig {
    /// Load from `REFLECT_*` environment variables, plus the file named by REFLECT_CONFIG if set.
    /// `.env` must already be loaded by the caller.
    pub fn load() -> Result<Self, DomainError> {
        let file = std::env::var("REFLECT_CONFIG").ok().map(PathBuf::from);
        Self::load_with_file(file.as_deref())
    }

    /// Load from an optional config file layered under `REFLECT_*` environment variables.
    pub fn load_with_file(file: Option<&Path>) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::from(path));
        }
        c = c.add_source(config::Environment::with_prefix("REFLECT").try_parsing(true));
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn model_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.model_dir.as_deref().unwrap_or(DEFAULT_MODEL_DIR))
    }

    /// Artifact paths: per-artifact overrides win over `model_dir` defaults.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        let mut paths = ArtifactPaths::in_dir(self.model_dir_or_default());
        if let Some(p) = &self.vectorizer_path {
            paths.vectorizer = PathBuf::from(p);
        }
        if let Some(p) = &self.classifier_path {
            paths.classifier = PathBuf::from(p);
        }
        if let Some(p) = &self.label_encoder_path {
            paths.label_encoder = PathBuf::from(p);
        }
        paths
    }

    pub fn use_mock_model(&self) -> bool {
        self.use_mock_model.unwrap_or(false)
    }

    pub fn export_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.export_dir.as_deref().unwrap_or(DEFAULT_EXPORT_DIR))
    }
}
