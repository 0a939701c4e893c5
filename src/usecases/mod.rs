//! Application use cases. Orchestrate domain logic via ports.

pub mod emotion_classifier;
pub mod journal_service;

pub use emotion_classifier::EmotionClassifier;
pub use journal_service::JournalService;
