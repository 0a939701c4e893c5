//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives one interactive journaling session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the session until the user quits. The session log lives only as long as this call.
    async fn run(&self) -> Result<(), DomainError>;
}
