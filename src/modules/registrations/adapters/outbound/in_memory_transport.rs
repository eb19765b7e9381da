// In memory implementation of the RegistrationTransport port.
//
// Purpose
// - Support handler tests without a registration server. The binary always
//   sends over HTTP.
//
// Responsibilities
// - Record every request it receives.
// - Answer like the registration service: a `{code, data, msg}` envelope with
//   code 0 on success and code 5001 when the username is already taken.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::modules::registrations::core::outcome::RegistrationResponse;
use crate::modules::registrations::core::ports::{RegistrationTransport, TransportError};
use crate::modules::registrations::core::registration_request::RegistrationRequest;

pub const IN_MEMORY_URL: &str = "memory://user/register";
pub const DUPLICATE_USER_CODE: u32 = 5001;

#[derive(Default)]
pub struct InMemoryRegistrationTransport {
    received: Mutex<Vec<RegistrationRequest>>,
    registered: Mutex<HashSet<String>>,
    offline: bool,
    delay_ms: AtomicU64,
}

impl InMemoryRegistrationTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn received(&self) -> Vec<RegistrationRequest> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl RegistrationTransport for InMemoryRegistrationTransport {
    async fn send(
        &self,
        index: usize,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, TransportError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.offline {
            return Err(TransportError::Offline);
        }
        self.received.lock().await.push(request.clone());

        let fresh = self
            .registered
            .lock()
            .await
            .insert(request.username.clone());
        let envelope = if fresh {
            json!({
                "code": 0,
                "data": { "username": request.username, "email": request.email },
                "msg": "",
            })
        } else {
            json!({
                "code": DUPLICATE_USER_CODE,
                "data": "",
                "msg": "user registration failed",
            })
        };

        Ok(RegistrationResponse {
            index,
            username: request.username.clone(),
            url: IN_MEMORY_URL.to_string(),
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: envelope.to_string(),
        })
    }
}
