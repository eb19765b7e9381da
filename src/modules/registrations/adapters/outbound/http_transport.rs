// HTTP implementation of the RegistrationTransport port.
//
// Responsibilities
// - POST the JSON payload to the registration endpoint.
// - Hand back status, headers and body untouched. Error statuses are responses,
//   only transport failures are errors.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::modules::registrations::core::outcome::RegistrationResponse;
use crate::modules::registrations::core::ports::{RegistrationTransport, TransportError};
use crate::modules::registrations::core::registration_request::RegistrationRequest;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4300/user/register";

#[derive(Debug, Clone)]
pub struct HttpRegistrationTransport {
    client: Client,
    endpoint: String,
}

impl HttpRegistrationTransport {
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl RegistrationTransport for HttpRegistrationTransport {
    async fn send(
        &self,
        index: usize,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(transport_error)?;

        Ok(RegistrationResponse {
            index,
            username: request.username.clone(),
            url,
            status,
            headers,
            body,
        })
    }
}
