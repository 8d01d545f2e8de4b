//! The impls and functions
//!
use itertools::join;
use log::*;
use crate::health_checks::HealthCheck;
use crate::report::{Buckets, Outcome, Severity, SEVERITY_LADDER};

const IMPOSSIBLE_STATE: &str = "UNKNOWN - No Critical, Warning or Passing Checks Found - This should not happen.";

impl Severity {
    pub fn exit_code(&self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK - ",
            Severity::Warning => "WARNING - ",
            Severity::Critical => "CRITICAL - ",
            Severity::Unknown => "UNKNOWN - ",
        }
    }
}

impl<'a> Buckets<'a> {
    pub fn new() -> Self {
        Default::default()
    }
    /// Take the checks with `ServiceID` equal to `service`, and put them in the bucket of their status.
    pub fn classify(
        checks: &'a [HealthCheck],
        service: &str,
    ) -> Self
    {
        let mut buckets = Buckets::new();
        for check in checks.iter().filter(|check| check.service_id == service) {
            match SEVERITY_LADDER.iter().find(|(status, _)| *status == check.status) {
                Some((_, severity)) => {
                    if let Some(bucket) = buckets.bucket_mut(*severity) {
                        bucket.push(check);
                    }
                }
                None => debug!("check {} has status '{}', skipping", check.check_id, check.status),
            }
        }
        buckets
    }
    pub fn bucket(
        &self,
        severity: Severity,
    ) -> &[&'a HealthCheck]
    {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Warning => &self.warning,
            Severity::Ok => &self.passing,
            Severity::Unknown => &[],
        }
    }
    fn bucket_mut(
        &mut self,
        severity: Severity,
    ) -> Option<&mut Vec<&'a HealthCheck>>
    {
        match severity {
            Severity::Critical => Some(&mut self.critical),
            Severity::Warning => Some(&mut self.warning),
            Severity::Ok => Some(&mut self.passing),
            Severity::Unknown => None,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.warning.is_empty() && self.passing.is_empty()
    }
    /// The most severe non-empty bucket.
    pub fn select(&self) -> Option<(Severity, &[&'a HealthCheck])> {
        SEVERITY_LADDER.iter()
            .map(|(_, severity)| (*severity, self.bucket(*severity)))
            .find(|(_, bucket)| !bucket.is_empty())
    }
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

/// Classify the checks for the service and produce the report.
pub fn evaluate(
    checks: &[HealthCheck],
    service: &str,
) -> Outcome
{
    let buckets = Buckets::classify(checks, service);
    debug!("service '{}': critical: {}, warning: {}, passing: {}", service, buckets.critical.len(), buckets.warning.len(), buckets.passing.len());

    if buckets.is_empty() {
        warn!("no checks for service '{}' in {} checks", service, checks.len());
        return Outcome {
            severity: Severity::Warning,
            text: format!("{}No checks for service '{}' found!", Severity::Warning.label(), service),
        };
    }

    match buckets.select() {
        Some((severity, selected)) => Outcome {
            severity,
            text: render(severity, selected),
        },
        None => Outcome {
            severity: Severity::Unknown,
            text: IMPOSSIBLE_STATE.to_string(),
        },
    }
}

/// Format the report for the checks of a single bucket.
///
/// ```text
/// CRITICAL - Checks: Service 'redis' check, Redis memory
/// Outputs:
///   dial tcp 127.0.0.1:6379: connect: connection refused
/// Notes:
///   Primary redis instance
/// ```
/// The `Outputs` and `Notes` blocks are only added when at least one check has a non-empty value.
pub fn render(
    severity: Severity,
    checks: &[&HealthCheck],
) -> String
{
    let mut text = format!("{}Checks: {}", severity.label(), join(checks.iter().map(|check| &check.name), ", "));

    let outputs: Vec<&str> = checks.iter()
        .map(|check| check.output.as_str())
        .filter(|output| !output.is_empty())
        .collect();
    if !outputs.is_empty() {
        text.push_str("\nOutputs: ");
        for output in outputs {
            text.push_str("\n  ");
            text.push_str(output);
        }
    }

    let notes: Vec<&str> = checks.iter()
        .map(|check| check.notes.as_str())
        .filter(|notes| !notes.is_empty())
        .collect();
    if !notes.is_empty() {
        text.push_str("\nNotes:");
        for note in notes {
            text.push_str("\n  ");
            text.push_str(note);
        }
    }

    text
}
