//! The errors that end a probe run, and the exit code each one maps to.
//!
use thiserror::Error;
use crate::report::Severity;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// An empty or invalid setting.
    #[error("{0}")]
    Configuration(String),
    /// Connecting, sending, timing out or reading the body.
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    /// The body is not a json array of health checks.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl ProbeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::Configuration(_) => Severity::Unknown.exit_code(),
            ProbeError::Fetch(_) | ProbeError::Status { .. } | ProbeError::Decode(_) => Severity::Critical.exit_code(),
        }
    }
}
