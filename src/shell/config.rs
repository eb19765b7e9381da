use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::modules::registrations::adapters::outbound::http_transport::DEFAULT_ENDPOINT;
use crate::modules::registrations::core::registration_request::DEFAULT_EMAIL_DOMAIN;
use crate::modules::registrations::use_cases::send_registration_batch::command::{
    DEFAULT_BASE_INDEX, DEFAULT_COUNT, SendRegistrationBatch,
};

pub const ENDPOINT_VAR: &str = "REGISTRATION_ENDPOINT";
pub const COUNT_VAR: &str = "REGISTRATION_COUNT";
pub const BASE_INDEX_VAR: &str = "REGISTRATION_BASE_INDEX";
pub const EMAIL_DOMAIN_VAR: &str = "REGISTRATION_EMAIL_DOMAIN";
pub const TIMEOUT_MS_VAR: &str = "REGISTRATION_TIMEOUT_MS";

/// Every request of a batch is built and spawned up front.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must not be {reason}")]
    Invalid {
        var: &'static str,
        reason: &'static str,
    },

    #[error("failed to load env file: {0}")]
    EnvFile(String),
}

/// Loads `path`, or `.env` from the working directory when `None`. A missing
/// file is fine; an unreadable or malformed one is an error.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    match loaded {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::EnvFile(err.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub endpoint: String,
    pub count: usize,
    pub base_index: u64,
    pub email_domain: String,
    pub timeout: Option<Duration>,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            count: DEFAULT_COUNT,
            base_index: DEFAULT_BASE_INDEX,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            timeout: None,
        }
    }
}

impl SenderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Unset or blank variables keep their default.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let count = match read(COUNT_VAR) {
            Some(value) => parse_number::<usize>(COUNT_VAR, &value)?,
            None => defaults.count,
        };
        if count == 0 {
            return Err(ConfigError::Invalid {
                var: COUNT_VAR,
                reason: "zero",
            });
        }
        if count > MAX_COUNT {
            return Err(ConfigError::Invalid {
                var: COUNT_VAR,
                reason: "above 10000",
            });
        }
        let base_index = match read(BASE_INDEX_VAR) {
            Some(value) => parse_number::<u64>(BASE_INDEX_VAR, &value)?,
            None => defaults.base_index,
        };
        // The last sequence number of the batch must fit in a u64.
        if base_index.checked_add(count as u64 - 1).is_none() {
            return Err(ConfigError::Invalid {
                var: BASE_INDEX_VAR,
                reason: "too large for the batch",
            });
        }
        let timeout = read(TIMEOUT_MS_VAR)
            .map(|value| parse_number::<u64>(TIMEOUT_MS_VAR, &value))
            .transpose()?
            .map(Duration::from_millis);

        Ok(Self {
            endpoint: read(ENDPOINT_VAR)
                .map(|value| value.trim().to_string())
                .unwrap_or(defaults.endpoint),
            count,
            base_index,
            email_domain: read(EMAIL_DOMAIN_VAR)
                .map(|value| value.trim().to_string())
                .unwrap_or(defaults.email_domain),
            timeout,
        })
    }

    pub fn batch(&self) -> SendRegistrationBatch {
        SendRegistrationBatch {
            count: self.count,
            base_index: self.base_index,
            email_domain: self.email_domain.clone(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::NotANumber {
            var,
            value: value.to_string(),
        })
}
