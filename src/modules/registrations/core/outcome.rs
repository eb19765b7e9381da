use std::fmt;

use crate::modules::registrations::core::ports::TransportError;

/// Opaque view of a completed registration call. The body is kept as text for
/// printing only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub index: usize,
    pub username: String,
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug)]
pub enum RequestOutcome {
    Succeeded(RegistrationResponse),
    Failed {
        index: usize,
        username: String,
        error: TransportError,
    },
}

impl RequestOutcome {
    pub fn index(&self) -> usize {
        match self {
            RequestOutcome::Succeeded(response) => response.index,
            RequestOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            RequestOutcome::Succeeded(response) => &response.username,
            RequestOutcome::Failed { username, .. } => username,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Succeeded(_))
    }
}

impl fmt::Display for RegistrationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Response {{ index: {}, username: {}, status: {}, url: {}, headers: {{",
            self.index, self.username, self.status, self.url
        )?;
        for (position, (name, value)) in self.headers.iter().enumerate() {
            if position > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        write!(f, " }}, body: {} }}", self.body)
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Succeeded(response) => write!(f, "{response}"),
            RequestOutcome::Failed {
                index,
                username,
                error,
            } => write!(
                f,
                "TransportFailure {{ index: {index}, username: {username}, error: {error} }}"
            ),
        }
    }
}
