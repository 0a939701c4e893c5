//! Loads the three model artifacts from JSON files and cross-checks them.
//!
//! Any failure here is fatal: the caller should abort before accepting input.

use super::{
    LabelEncoder, LabelEncoderArtifact, LinearArtifact, LinearClassifier, TfidfArtifact,
    TfidfVectorizer,
};
use crate::domain::{DomainError, InternalLabel};
use crate::ports::LabelDecoder;
use crate::usecases::EmotionClassifier;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// Locations of the three artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub vectorizer: PathBuf,
    pub classifier: PathBuf,
    pub label_encoder: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside a model directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vectorizer: dir.join("vectorizer.json"),
            classifier: dir.join("classifier.json"),
            label_encoder: dir.join("label_encoder.json"),
        }
    }
}

/// Loaded, validated artifacts. Read-only after construction.
#[derive(Debug)]
pub struct ModelArtifacts {
    pub vectorizer: Arc<TfidfVectorizer>,
    pub classifier: Arc<LinearClassifier>,
    pub label_encoder: Arc<LabelEncoder>,
}

impl ModelArtifacts {
    /// Read all three artifacts and check they fit together.
    pub async fn load(paths: &ArtifactPaths) -> Result<Self, DomainError> {
        let vectorizer: TfidfArtifact =
            read_json(TfidfVectorizer::ARTIFACT, &paths.vectorizer).await?;
        let classifier: LinearArtifact =
            read_json(LinearClassifier::ARTIFACT, &paths.classifier).await?;
        let label_encoder: LabelEncoderArtifact =
            read_json(LabelEncoder::ARTIFACT, &paths.label_encoder).await?;

        let artifacts = Self {
            vectorizer: Arc::new(TfidfVectorizer::from_artifact(vectorizer)?),
            classifier: Arc::new(LinearClassifier::from_artifact(classifier)?),
            label_encoder: Arc::new(LabelEncoder::from_artifact(label_encoder)?),
        };
        artifacts.check_compatible()?;

        info!(
            features = artifacts.vectorizer.dim(),
            classes = artifacts.label_encoder.classes().len(),
            "model artifacts loaded"
        );
        Ok(artifacts)
    }

    fn check_compatible(&self) -> Result<(), DomainError> {
        let dim = self.vectorizer.dim();
        let width = self.classifier.n_features();
        if dim != width {
            return Err(DomainError::artifact(
                LinearClassifier::ARTIFACT,
                format!(
                    "expects {} features but vectorizer produces {}",
                    width, dim
                ),
            ));
        }
        for &class in self.classifier.classes() {
            if self.label_encoder.decode_label(InternalLabel(class)).is_err() {
                return Err(DomainError::artifact(
                    LabelEncoder::ARTIFACT,
                    format!("cannot decode classifier class {}", class),
                ));
            }
        }
        Ok(())
    }

    /// Wire the artifacts into the classifier adapter.
    pub fn into_classifier(self) -> EmotionClassifier {
        EmotionClassifier::new(self.vectorizer, self.classifier, self.label_encoder)
    }
}

async fn read_json<T: DeserializeOwned>(name: &str, path: &Path) -> Result<T, DomainError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::artifact(name, format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::artifact(name, format!("{}: {}", path.display(), e)))
}
