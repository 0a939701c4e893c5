//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure (model, clock, export)

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{Classifier, Clock, ExportPort, LabelDecoder, Vectorizer};
