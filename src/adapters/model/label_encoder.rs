//! Label encoder artifact. Implements `LabelDecoder`.

use crate::domain::{DomainError, InternalLabel};
use crate::ports::LabelDecoder;
use serde::Deserialize;

/// On-disk form of `label_encoder.json`.
#[derive(Debug, Deserialize)]
pub struct LabelEncoderArtifact {
    pub classes: Vec<String>,
}

/// Internal label `i` decodes to `classes[i]`.
#[derive(Debug)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub const ARTIFACT: &'static str = "label_encoder";

    pub fn from_artifact(artifact: LabelEncoderArtifact) -> Result<Self, DomainError> {
        if artifact.classes.is_empty() {
            return Err(DomainError::artifact(Self::ARTIFACT, "no classes"));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = artifact.classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(DomainError::artifact(
                Self::ARTIFACT,
                format!("duplicate class '{}'", dup),
            ));
        }
        Ok(Self {
            classes: artifact.classes,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode_label(&self, label: InternalLabel) -> Result<String, DomainError> {
        usize::try_from(label.0)
            .ok()
            .and_then(|i| self.classes.get(i))
            .cloned()
            .ok_or_else(|| {
                DomainError::Model(format!(
                    "label {} outside encoder range 0..{}",
                    label.0,
                    self.classes.len()
                ))
            })
    }
}
