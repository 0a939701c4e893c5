//! Infrastructure adapters. Implement outbound ports and drive the inbound one.
//!
//! Model artifacts, clock, CSV export, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod export;
pub mod model;
pub mod ui;
