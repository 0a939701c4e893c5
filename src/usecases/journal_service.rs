//! Journal use case: accept a submission, classify it, stamp it and append it
//! to the caller's session.

use crate::domain::{DomainError, JournalEntry, Session, TrendPoint, is_blank};
use crate::ports::Clock;
use crate::usecases::EmotionClassifier;
use std::sync::Arc;
use tracing::info;

/// Journal service. Stateless; every session is passed in explicitly.
pub struct JournalService {
    classifier: Arc<EmotionClassifier>,
    clock: Arc<dyn Clock>,
}

impl JournalService {
    pub fn new(classifier: Arc<EmotionClassifier>, clock: Arc<dyn Clock>) -> Self {
        Self { classifier, clock }
    }

    /// Submit raw text. Blank input is rejected with `Ok(None)` and leaves the session untouched.
    ///
    /// The entry timestamp never goes backwards relative to the previous entry,
    /// even if the wall clock does.
    pub fn submit_entry(
        &self,
        session: &mut Session,
        raw_text: &str,
    ) -> Result<Option<JournalEntry>, DomainError> {
        if is_blank(raw_text) {
            return Ok(None);
        }

        let prediction = self.classifier.predict(raw_text)?;
        let now = self.clock.now();
        let timestamp = match session.latest() {
            Some(prev) if prev.timestamp() > now => prev.timestamp(),
            _ => now,
        };

        let entry = JournalEntry::new(timestamp, raw_text, prediction.emotion);
        info!(
            emotion = %entry.emotion(),
            score = entry.score(),
            text_len = raw_text.len(),
            entries = session.len() + 1,
            "entry saved"
        );
        session.append(entry.clone());
        Ok(Some(entry))
    }

    /// Entries newest first.
    pub fn history<'a>(&self, session: &'a Session) -> Vec<&'a JournalEntry> {
        session.history().collect()
    }

    pub fn trend(&self, session: &Session) -> Vec<TrendPoint> {
        session.trend()
    }

    pub fn support_alert_active(&self, session: &Session) -> bool {
        session.support_alert_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Emotion, FeatureVector, InternalLabel};
    use crate::ports::{Classifier, LabelDecoder, Vectorizer};
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::sync::Mutex;

    struct NullVectorizer;

    impl Vectorizer for NullVectorizer {
        fn vectorize(&self, _text: &str) -> FeatureVector {
            FeatureVector::default()
        }
    }

    struct FixedClassifier;

    impl Classifier for FixedClassifier {
        fn classify(&self, _features: &FeatureVector) -> InternalLabel {
            InternalLabel(0)
        }
    }

    /// Decoder whose answer the test can change between submissions.
    struct ScriptedDecoder(Mutex<String>);

    impl LabelDecoder for ScriptedDecoder {
        fn decode_label(&self, _label: InternalLabel) -> Result<String, DomainError> {
            Ok(self.0.lock().unwrap().clone())
        }
    }

    /// Clock that returns queued instants, then repeats the last one.
    struct ScriptedClock(Mutex<Vec<DateTime<Local>>>);

    impl Clock for ScriptedClock {
        fn now(&self) -> DateTime<Local> {
            let mut q = self.0.lock().unwrap();
            if q.len() > 1 { q.remove(0) } else { q[0] }
        }
    }

    fn base() -> DateTime<Local> {
        Local.timestamp_opt(1_760_000_000, 0).unwrap()
    }

    fn service(
        label: &str,
        times: Vec<DateTime<Local>>,
    ) -> (JournalService, Arc<ScriptedDecoder>) {
        let decoder = Arc::new(ScriptedDecoder(Mutex::new(label.to_string())));
        let classifier = Arc::new(EmotionClassifier::new(
            Arc::new(NullVectorizer),
            Arc::new(FixedClassifier),
            decoder.clone(),
        ));
        let clock = Arc::new(ScriptedClock(Mutex::new(times)));
        (JournalService::new(classifier, clock), decoder)
    }

    #[test]
    fn test_blank_submission_rejected() {
        let (svc, _) = service("joy", vec![base()]);
        let mut session = Session::new();
        assert_eq!(svc.submit_entry(&mut session, "   ").unwrap(), None);
        assert_eq!(svc.submit_entry(&mut session, "").unwrap(), None);
        assert_eq!(svc.submit_entry(&mut session, "\n\t").unwrap(), None);
        assert_eq!(svc.submit_entry(&mut session, "\u{1c}").unwrap(), None);
        assert_eq!(svc.submit_entry(&mut session, " \u{1f}\u{1e} ").unwrap(), None);
        assert!(session.is_empty());
    }

    #[test]
    fn test_end_to_end_joy_entry() {
        let (svc, _) = service("joy", vec![base()]);
        let mut session = Session::new();
        let entry = svc
            .submit_entry(&mut session, "I feel amazing today")
            .unwrap()
            .expect("entry created");

        assert_eq!(entry.emotion(), &Emotion::Joy);
        assert_eq!(entry.score(), 80);
        assert_eq!(entry.text(), "I feel amazing today");
        assert_eq!(session.len(), 1);
        assert_eq!(svc.history(&session).first().copied(), Some(&entry));
        let trend = svc.trend(&session);
        assert_eq!(trend.last().map(|p| p.score), Some(80));
        assert_eq!(trend.last().map(|p| p.timestamp), Some(base()));
    }

    #[test]
    fn test_raw_text_kept_unmodified() {
        let (svc, _) = service("neutral", vec![base()]);
        let mut session = Session::new();
        let entry = svc
            .submit_entry(&mut session, "  Meh... 3/10  ")
            .unwrap()
            .unwrap();
        assert_eq!(entry.text(), "  Meh... 3/10  ");
    }

    #[test]
    fn test_unknown_emotion_still_stored() {
        let (svc, _) = service("surprise", vec![base()]);
        let mut session = Session::new();
        let entry = svc.submit_entry(&mut session, "wow").unwrap().unwrap();
        assert_eq!(entry.score(), 0);
        assert_eq!(session.latest().map(|e| e.emotion().label()), Some("surprise"));
    }

    #[test]
    fn test_timestamps_never_go_backwards() {
        let t0 = base();
        let (svc, _) = service("joy", vec![t0, t0 - Duration::seconds(30), t0 + Duration::seconds(5)]);
        let mut session = Session::new();
        for text in ["a", "b", "c"] {
            svc.submit_entry(&mut session, text).unwrap();
        }
        let stamps: Vec<_> = session.entries().iter().map(|e| e.timestamp()).collect();
        assert_eq!(stamps, vec![t0, t0, t0 + Duration::seconds(5)]);
    }

    #[test]
    fn test_support_alert_after_three_negative_submissions() {
        let (svc, decoder) = service("sadness", vec![base()]);
        let mut session = Session::new();
        svc.submit_entry(&mut session, "one").unwrap();
        svc.submit_entry(&mut session, "two").unwrap();
        assert!(!svc.support_alert_active(&session));
        *decoder.0.lock().unwrap() = "fear".to_string();
        svc.submit_entry(&mut session, "three").unwrap();
        assert!(svc.support_alert_active(&session));
        *decoder.0.lock().unwrap() = "joy".to_string();
        svc.submit_entry(&mut session, "four").unwrap();
        assert!(!svc.support_alert_active(&session));
    }

    #[test]
    fn test_history_and_trend_order() {
        let t0 = base();
        let (svc, _) = service(
            "guilt",
            vec![t0, t0 + Duration::seconds(1), t0 + Duration::seconds(2)],
        );
        let mut session = Session::new();
        for text in ["first", "second", "third"] {
            svc.submit_entry(&mut session, text).unwrap();
        }
        let texts: Vec<&str> = svc.history(&session).into_iter().map(|e| e.text()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
        let times: Vec<_> = svc.trend(&session).iter().map(|p| p.timestamp).collect();
        assert_eq!(times, vec![t0, t0 + Duration::seconds(1), t0 + Duration::seconds(2)]);
    }

    #[test]
    fn test_sessions_are_independent() {
        let (svc, _) = service("anger", vec![base()]);
        let mut a = Session::new();
        let mut b = Session::new();
        svc.submit_entry(&mut a, "grr").unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        svc.submit_entry(&mut b, "hmm").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }
}
