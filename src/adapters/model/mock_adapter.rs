//! Mock model for running without trained artifacts.
//!
//! Keyword lexicon per emotion; implements all three model capabilities so it can
//! stand in for the vectorizer, classifier and label encoder at once.

use crate::domain::{DomainError, Emotion, FeatureVector, InternalLabel};
use crate::ports::{Classifier, LabelDecoder, Vectorizer};
use crate::usecases::EmotionClassifier;
use std::sync::Arc;
use tracing::info;

/// Keywords per known emotion, in `Emotion::KNOWN` order.
const LEXICON: [&[&str]; 8] = [
    // joy
    &["happy", "amazing", "great", "love", "glad", "excited", "wonderful", "joy", "grateful"],
    // neutral
    &[],
    // fear
    &["scared", "afraid", "anxious", "worried", "nervous", "terrified", "panic"],
    // anger
    &["angry", "furious", "annoyed", "hate", "mad", "rage", "irritated"],
    // sadness
    &["sad", "lonely", "depressed", "cry", "crying", "miserable", "down", "hopeless"],
    // disgust
    &["disgusted", "gross", "sick", "revolting", "nasty"],
    // shame
    &["ashamed", "embarrassed", "humiliated", "shame"],
    // guilt
    &["guilty", "sorry", "regret", "fault"],
];

const NEUTRAL: usize = 1;

/// Lexicon-based stand-in model. One feature column per emotion.
#[derive(Debug, Default)]
pub struct MockModel;

impl MockModel {
    pub fn new() -> Self {
        Self
    }

    /// Build a classifier adapter backed by one shared mock instance.
    pub fn into_classifier(self) -> EmotionClassifier {
        let model = Arc::new(self);
        info!("[MOCK] using keyword lexicon model");
        EmotionClassifier::new(model.clone(), model.clone(), model)
    }
}

impl Vectorizer for MockModel {
    fn vectorize(&self, text: &str) -> FeatureVector {
        let hits = text.split_whitespace().flat_map(|word| {
            LEXICON
                .iter()
                .enumerate()
                .filter(move |(_, words)| words.contains(&word))
                .map(|(col, _)| (col, 1.0))
        });
        FeatureVector::from_pairs(LEXICON.len(), hits)
    }
}

impl Classifier for MockModel {
    /// Most keyword hits wins, earliest column on ties. No hits means neutral.
    fn classify(&self, features: &FeatureVector) -> InternalLabel {
        let best = features
            .entries()
            .iter()
            .fold(None::<(usize, f64)>, |best, &(col, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((col, v)),
            })
            .map_or(NEUTRAL, |(col, _)| col);
        InternalLabel(best as i64)
    }
}

impl LabelDecoder for MockModel {
    fn decode_label(&self, label: InternalLabel) -> Result<String, DomainError> {
        usize::try_from(label.0)
            .ok()
            .and_then(|i| Emotion::KNOWN.get(i).map(|e| e.label().to_string()))
            .ok_or_else(|| DomainError::Model(format!("[MOCK] unknown label {}", label.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_model_predicts_from_keywords() {
        let classifier = MockModel::new().into_classifier();

        let p = classifier.predict("I feel amazing today!").unwrap();
        assert_eq!(p.emotion, Emotion::Joy);
        assert_eq!(p.score, 80);

        let p = classifier.predict("So SAD and lonely...").unwrap();
        assert_eq!(p.emotion, Emotion::Sadness);

        let p = classifier.predict("I regret it, my fault").unwrap();
        assert_eq!(p.emotion, Emotion::Guilt);
    }

    #[test]
    fn test_mock_model_defaults_to_neutral() {
        let classifier = MockModel::new().into_classifier();
        let p = classifier.predict("went to the store").unwrap();
        assert_eq!(p.emotion, Emotion::Neutral);
        assert_eq!(p.score, 0);
    }

    #[test]
    fn test_mock_model_majority_wins() {
        let m = MockModel::new();
        let fv = m.vectorize("happy but angry angry");
        assert_eq!(m.classify(&fv), InternalLabel(3));
        assert_eq!(m.decode_label(InternalLabel(3)).unwrap(), "anger");
    }
}
