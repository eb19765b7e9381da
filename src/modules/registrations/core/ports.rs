// Ports define what the sender needs from the outside world, without implementing it.
//
// Responsibilities
// - Describe the registration transport as a trait so the batch handler is
//   independent of reqwest.
//
// Testing guidance
// - The in memory transport implements this port for tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::registrations::core::outcome::RegistrationResponse;
use crate::modules::registrations::core::registration_request::RegistrationRequest;

/// Failures of the transport itself. HTTP error statuses are not transport
/// failures; they come back as a [`RegistrationResponse`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("transport offline")]
    Offline,
}

#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    async fn send(
        &self,
        index: usize,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, TransportError>;
}
