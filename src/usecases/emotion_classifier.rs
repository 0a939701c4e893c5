//! Emotion classifier. Runs the inference path over the three model capabilities:
//! normalize -> vectorize -> classify -> decode -> score.

use crate::domain::{DomainError, Emotion, Prediction, normalize};
use crate::ports::{Classifier, LabelDecoder, Vectorizer};
use std::sync::Arc;
use tracing::debug;

/// Stateless adapter over already-loaded model capabilities.
///
/// Build once at startup and share via `Arc`; nothing here is mutated after construction.
pub struct EmotionClassifier {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
    decoder: Arc<dyn LabelDecoder>,
}

impl EmotionClassifier {
    pub fn new(
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn Classifier>,
        decoder: Arc<dyn LabelDecoder>,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            decoder,
        }
    }

    /// Classify raw user text and derive its mood score.
    ///
    /// A decoded label missing from the score table is kept as `Emotion::Other`
    /// with score 0; that is not an error.
    pub fn predict(&self, raw_text: &str) -> Result<Prediction, DomainError> {
        let cleaned = normalize(raw_text);
        let features = self.vectorizer.vectorize(&cleaned);
        let label = self.classifier.classify(&features);
        let decoded = self.decoder.decode_label(label)?;
        let emotion = Emotion::from_label(&decoded);
        if let Emotion::Other(ref unknown) = emotion {
            debug!(label = %unknown, "label not in score table, scoring 0");
        }
        let prediction = Prediction::from_emotion(emotion);
        debug!(
            features = features.entries().len(),
            internal_label = label.0,
            emotion = %prediction.emotion,
            score = prediction.score,
            "prediction"
        );
        Ok(prediction)
    }
}
