//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::Result;
use crate::error::ProbeError;
use crate::health_checks::{AllHealthChecks, HealthCheck};
use crate::utility::{self, Settings};

impl HealthCheck {
    pub fn new() -> Self {
        Default::default()
    }
}

impl AllHealthChecks {
    pub fn new() -> Self {
        Default::default()
    }
    /// Perform the http request for the node in the settings and decode the response.
    pub fn read_http(
        settings: &Settings,
    ) -> Result<AllHealthChecks>
    {
        info!("begin http read");
        let timer = Instant::now();

        let url = health_checks_url(&settings.host, &settings.node);
        let data_from_http = utility::http_get(&url, settings.timeout, settings.accept_invalid_certs)?;

        info!("end http read {:?}", timer.elapsed());

        let mut allhealthchecks = AllHealthChecks::new();
        allhealthchecks.health_checks = AllHealthChecks::parse_health_checks(&data_from_http)?;
        Ok(allhealthchecks)
    }
    fn parse_health_checks(
        http_data: &str,
    ) -> Result<Vec<HealthCheck>, ProbeError>
    {
        serde_json::from_str(http_data)
            .map_err(|e| {
                debug!("could not parse /v1/health/node json data, error: {}", e);
                ProbeError::Decode(e)
            })
    }
}

/// The url is formed verbatim: a trailing '/' on host is kept.
pub fn health_checks_url(
    host: &str,
    node: &str,
) -> String
{
    format!("{}/v1/health/node/{}", host, node)
}
