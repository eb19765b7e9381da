// Registration payload sent to the user registration endpoint.
//
// Purpose
// - Derive a deterministic identity from a sequence number.
//
// Boundaries
// - No transport details here. Serialisation shape is the wire body.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAIL_DOMAIN: &str = "qq.com";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegistrationRequest {
    /// Builds the identity for sequence number `seq`: `test{seq}` as username
    /// and password, `email{seq}@{email_domain}` as email.
    pub fn numbered(seq: u64, email_domain: &str) -> Self {
        let credential = format!("test{seq}");
        Self {
            username: credential.clone(),
            password: credential,
            email: format!("email{seq}@{email_domain}"),
        }
    }
}
