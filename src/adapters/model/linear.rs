//! Linear classifier artifact (one-vs-rest decision functions). Implements `Classifier`.

use crate::domain::{DomainError, FeatureVector, InternalLabel};
use crate::ports::Classifier;
use serde::Deserialize;

/// On-disk form of `classifier.json`.
#[derive(Debug, Deserialize)]
pub struct LinearArtifact {
    pub classes: Vec<i64>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// Dense linear model: one weight row per class, or a single row for a binary model.
#[derive(Debug)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    pub const ARTIFACT: &'static str = "classifier";

    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, DomainError> {
        let bad = |reason: String| DomainError::artifact(Self::ARTIFACT, reason);

        if artifact.classes.len() < 2 {
            return Err(bad(format!(
                "need at least 2 classes, got {}",
                artifact.classes.len()
            )));
        }
        let binary = artifact.classes.len() == 2 && artifact.coef.len() == 1;
        if !binary && artifact.coef.len() != artifact.classes.len() {
            return Err(bad(format!(
                "{} coefficient rows for {} classes",
                artifact.coef.len(),
                artifact.classes.len()
            )));
        }
        if artifact.intercept.len() != artifact.coef.len() {
            return Err(bad(format!(
                "{} intercepts for {} coefficient rows",
                artifact.intercept.len(),
                artifact.coef.len()
            )));
        }
        let width = artifact.coef[0].len();
        if artifact.coef.iter().any(|row| row.len() != width) {
            return Err(bad("coefficient rows differ in length".to_string()));
        }
        Ok(Self {
            classes: artifact.classes,
            coef: artifact.coef,
            intercept: artifact.intercept,
        })
    }

    /// Number of features each row expects.
    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn decision(&self, features: &FeatureVector) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| features.dot(row) + b)
            .collect()
    }
}

impl Classifier for LinearClassifier {
    /// Highest decision wins; the first class wins ties.
    fn classify(&self, features: &FeatureVector) -> InternalLabel {
        let scores = self.decision(features);
        if scores.len() == 1 {
            let idx = usize::from(scores[0] > 0.0);
            return InternalLabel(self.classes[idx]);
        }
        let mut best = 0;
        for (i, s) in scores.iter().enumerate().skip(1) {
            if *s > scores[best] {
                best = i;
            }
        }
        InternalLabel(self.classes[best])
    }
}
