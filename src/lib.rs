//! check_consul: an Icinga2/Nagios plugin reporting the Consul health checks of a service.
//!
//! A run is a single pass:
//! settings → `GET <host>/v1/health/node/<node>` → decode → classify per service → report → exit code.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

use clap::Parser;
use anyhow::Result;
use log::*;

pub mod error;
pub mod health_checks;
pub mod report;
pub mod utility;

pub use error::ProbeError;
pub use health_checks::{AllHealthChecks, HealthCheck};
pub use report::{Buckets, Outcome, Severity};
pub use utility::Settings;

pub const DEFAULT_HOST: &str = "http://localhost:8500";
pub const DEFAULT_SERVICE: &str = "consul";
/// Seconds, for the complete HTTP request.
pub const DEFAULT_TIMEOUT: &str = "10";

/// Command line options.
///
/// Every value option can also be set via its environment variable, or a `.env` file
/// in the current working directory. The command line takes precedence.
#[derive(Debug, Parser)]
#[command(about = "Icinga2/Nagios plugin for Consul service health checks")]
pub struct Opts {
    /// display version information
    #[arg(long)]
    pub version: bool,
    /// consul http(s) address with protocol [env: CHECK_CONSUL_HOST] [default: http://localhost:8500]
    #[arg(long, value_name = "url")]
    pub host: Option<String>,
    /// the node to query [env: CHECK_CONSUL_NODE] [default: the current hostname]
    #[arg(long, value_name = "node")]
    pub node: Option<String>,
    /// consul service id [env: CHECK_CONSUL_SERVICE] [default: consul]
    #[arg(long, value_name = "service")]
    pub service: Option<String>,
    /// http request timeout in seconds, 0 disables [env: CHECK_CONSUL_TIMEOUT] [default: 10]
    #[arg(long, value_name = "seconds")]
    pub timeout: Option<String>,
    /// accept invalid certificates for https hosts
    #[arg(long)]
    pub accept_invalid_certs: bool,
}

pub fn version_banner() -> String
{
    format!("Icinga2/Nagios Consul Plugin

Version: {}
    Git: {}
  Build: {}
",
            env!("CARGO_PKG_VERSION"),
            option_env!("GIT_HASH").unwrap_or("unknown"),
            option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
    )
}

/// Resolve the settings, read the checks of the node and evaluate them for the service.
///
/// Errors are [`ProbeError`]s wrapped in [`anyhow::Error`]; the exit code is obtained via downcasting.
pub fn run(
    options: &Opts,
) -> Result<Outcome>
{
    let settings = Settings::resolve(options)?;
    info!("checking service '{}' on node '{}' via {}", settings.service, settings.node, settings.host);

    let allhealthchecks = AllHealthChecks::read_http(&settings)?;
    debug!("received {} health checks", allhealthchecks.health_checks.len());

    Ok(report::evaluate(&allhealthchecks.health_checks, &settings.service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_version_banner() {
        let banner = version_banner();
        assert!(banner.starts_with("Icinga2/Nagios Consul Plugin\n\nVersion: "));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
        assert!(banner.contains("\n    Git: "));
        assert!(banner.contains("\n  Build: "));
    }

    #[test]
    fn unit_opts_parse_all() {
        let options = Opts::parse_from([
            "check_consul",
            "--host", "https://consul.example.com:8501",
            "--node", "node1",
            "--service", "redis",
            "--timeout", "3",
            "--accept-invalid-certs",
        ]);
        assert!(!options.version);
        assert_eq!(options.host.as_deref(), Some("https://consul.example.com:8501"));
        assert_eq!(options.node.as_deref(), Some("node1"));
        assert_eq!(options.service.as_deref(), Some("redis"));
        assert_eq!(options.timeout.as_deref(), Some("3"));
        assert!(options.accept_invalid_certs);
    }

    #[test]
    fn unit_opts_parse_version() {
        let options = Opts::parse_from(["check_consul", "--version"]);
        assert!(options.version);
        assert!(options.host.is_none());
    }

    #[test]
    fn unit_opts_reject_unknown_flag() {
        assert!(Opts::try_parse_from(["check_consul", "--nodes", "node1"]).is_err());
    }
}
