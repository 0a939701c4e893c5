//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the mood score table, text normalization and the session log live here.

pub mod entities;
pub mod errors;
pub mod normalize;
pub mod session;

pub use entities::{Emotion, FeatureVector, InternalLabel, JournalEntry, Prediction, TrendPoint};
pub use errors::DomainError;
pub use normalize::{is_blank, normalize};
pub use session::{SUPPORT_ALERT_WINDOW, Session};
