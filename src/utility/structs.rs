//! The structs
//!
use std::time::Duration;

/// The resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// base url of the consul http api, including the protocol.
    pub host: String,
    pub node: String,
    /// the `ServiceID` the checks are filtered on.
    pub service: String,
    /// `None` means the request can take forever.
    pub timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
}
