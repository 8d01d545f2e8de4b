//! The structs
//!
use crate::health_checks::HealthCheck;

/// The plugin states, with the exit code a monitoring system expects for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}
/// Consul check status to severity, most severe first.
///
/// Statuses not in this list do not end up in any bucket.
pub const SEVERITY_LADDER: [(&str, Severity); 3] = [
    ("critical", Severity::Critical),
    ("warning", Severity::Warning),
    ("passing", Severity::Ok),
];
/// The checks of a single service, split per status, in the order consul returned them.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub critical: Vec<&'a HealthCheck>,
    pub warning: Vec<&'a HealthCheck>,
    pub passing: Vec<&'a HealthCheck>,
}
/// The text to print and the state to exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub severity: Severity,
    pub text: String,
}
