//! TF-IDF vectorizer artifact. Implements `Vectorizer`.

use crate::domain::{DomainError, FeatureVector};
use crate::ports::Vectorizer;
use serde::Deserialize;
use std::collections::HashMap;

/// Output normalization applied after idf weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// On-disk form of `vectorizer.json`.
#[derive(Debug, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

/// Word n-gram TF-IDF vectorizer over normalized text.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    pub const ARTIFACT: &'static str = "vectorizer";

    /// Validate the artifact shape and build the vectorizer.
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self, DomainError> {
        let dim = artifact.idf.len();
        if artifact.vocabulary.len() != dim {
            return Err(DomainError::artifact(
                Self::ARTIFACT,
                format!(
                    "vocabulary has {} terms but idf has {} weights",
                    artifact.vocabulary.len(),
                    dim
                ),
            ));
        }
        if let Some((term, col)) = artifact.vocabulary.iter().find(|(_, c)| **c >= dim) {
            return Err(DomainError::artifact(
                Self::ARTIFACT,
                format!("term '{}' maps to column {} (dimension {})", term, col, dim),
            ));
        }
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(DomainError::artifact(
                Self::ARTIFACT,
                format!("invalid ngram_range ({}, {})", min_n, max_n),
            ));
        }
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
        })
    }

    /// Number of feature columns.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Words of at least two letters; single letters are not features.
    fn tokens(text: &str) -> Vec<&str> {
        text.split_whitespace().filter(|t| t.chars().count() >= 2).collect()
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f64> {
        let tokens = Self::tokens(text);
        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&col) = self.vocabulary.get(&gram) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
        }
        counts
    }
}

impl Vectorizer for TfidfVectorizer {
    fn vectorize(&self, text: &str) -> FeatureVector {
        let mut weighted: Vec<(usize, f64)> = self
            .term_counts(text)
            .into_iter()
            .map(|(col, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (col, tf * self.idf[col])
            })
            .collect();

        let norm = match self.norm {
            Some(Norm::L2) => weighted.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => weighted.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            None => 1.0,
        };
        if norm > 0.0 {
            for (_, v) in weighted.iter_mut() {
                *v /= norm;
            }
        }
        FeatureVector::from_pairs(self.dim(), weighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(json: &str) -> TfidfArtifact {
        serde_json::from_str(json).unwrap()
    }

    fn simple() -> TfidfVectorizer {
        TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"happy": 0, "sad": 1, "today": 2}, "idf": [2.0, 1.0, 1.0]}"#,
        ))
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let v = simple();
        assert_eq!(v.ngram_range, (1, 1));
        assert_eq!(v.norm, Some(Norm::L2));
        assert!(!v.sublinear_tf);
        assert_eq!(v.dim(), 3);
    }

    #[test]
    fn test_vectorize_l2_normalized() {
        let fv = simple().vectorize("happy happy today unknown");
        // raw: happy = 2 * 2.0 = 4.0, today = 1.0
        let norm = (16.0f64 + 1.0).sqrt();
        let e = fv.entries();
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].0, 0);
        assert!((e[0].1 - 4.0 / norm).abs() < 1e-12);
        assert_eq!(e[1].0, 2);
        assert!((e[1].1 - 1.0 / norm).abs() < 1e-12);
        let len: f64 = e.iter().map(|(_, v)| v * v).sum();
        assert!((len - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vectorize_empty_text() {
        let fv = simple().vectorize("");
        assert!(fv.is_empty());
        assert_eq!(fv.dim(), 3);
    }

    #[test]
    fn test_single_letter_tokens_ignored() {
        let v = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"i": 0, "am": 1}, "idf": [1.0, 1.0], "norm": null}"#,
        ))
        .unwrap();
        assert_eq!(v.vectorize("i am").entries(), &[(1, 1.0)]);
    }

    #[test]
    fn test_bigrams_and_sublinear_tf() {
        let v = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"not": 0, "good": 1, "not good": 2},
                "idf": [1.0, 1.0, 3.0], "ngram_range": [1, 2],
                "sublinear_tf": true, "norm": null}"#,
        ))
        .unwrap();
        let fv = v.vectorize("not good not good");
        let tf2 = 1.0 + 2.0f64.ln();
        assert_eq!(fv.entries(), &[(0, tf2), (1, tf2), (2, tf2 * 3.0)]);
    }

    #[test]
    fn test_l1_norm() {
        let v = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"aa": 0, "bb": 1}, "idf": [1.0, 3.0], "norm": "l1"}"#,
        ))
        .unwrap();
        assert_eq!(v.vectorize("aa bb").entries(), &[(0, 0.25), (1, 0.75)]);
    }

    #[test]
    fn test_rejects_mismatched_idf() {
        let err = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"aa": 0, "bb": 1}, "idf": [1.0]}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DomainError::Artifact { ref name, .. } if name == "vectorizer"));
    }

    #[test]
    fn test_rejects_out_of_range_column() {
        let err = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {"aa": 0, "bb": 5}, "idf": [1.0, 1.0]}"#,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("column 5"));
    }

    #[test]
    fn test_rejects_bad_ngram_range() {
        let err = TfidfVectorizer::from_artifact(artifact(
            r#"{"vocabulary": {}, "idf": [], "ngram_range": [2, 1]}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DomainError::Artifact { .. }));
    }
}
