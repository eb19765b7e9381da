// Command data type for sending a batch of registrations.
//
// Purpose
// - Express how many identities to register and where their numbering starts.
//
// Responsibilities
// - Carry input data for the handler and derive the payloads in index order.
// - Be independent of the transport (not tied to HTTP).

use crate::modules::registrations::core::registration_request::{
    DEFAULT_EMAIL_DOMAIN, RegistrationRequest,
};

pub const DEFAULT_COUNT: usize = 20;
pub const DEFAULT_BASE_INDEX: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRegistrationBatch {
    pub count: usize,
    pub base_index: u64,
    pub email_domain: String,
}

impl Default for SendRegistrationBatch {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            base_index: DEFAULT_BASE_INDEX,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl SendRegistrationBatch {
    pub fn requests(&self) -> Vec<RegistrationRequest> {
        (0..self.count)
            .map(|i| RegistrationRequest::numbered(self.base_index + i as u64, &self.email_domain))
            .collect()
    }
}
