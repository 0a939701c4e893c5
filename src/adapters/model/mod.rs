//! Model adapters. Implement the Vectorizer / Classifier / LabelDecoder ports.
//!
//! Provides JSON-artifact backed implementations and a keyword mock for development.

pub mod label_encoder;
pub mod linear;
pub mod loader;
pub mod mock_adapter;
pub mod tfidf;

pub use label_encoder::{LabelEncoder, LabelEncoderArtifact};
pub use linear::{LinearArtifact, LinearClassifier};
pub use loader::{ArtifactPaths, ModelArtifacts};
pub use mock_adapter::MockModel;
pub use tfidf::{Norm, TfidfArtifact, TfidfVectorizer};
