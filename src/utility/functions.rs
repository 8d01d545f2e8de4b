//! The impls and functions
//!
use std::{env, time::Duration};
use log::*;
use crate::error::ProbeError;
use crate::utility::Settings;
use crate::{Opts, DEFAULT_HOST, DEFAULT_SERVICE, DEFAULT_TIMEOUT};

pub const ENV_HOST: &str = "CHECK_CONSUL_HOST";
pub const ENV_NODE: &str = "CHECK_CONSUL_NODE";
pub const ENV_SERVICE: &str = "CHECK_CONSUL_SERVICE";
pub const ENV_TIMEOUT: &str = "CHECK_CONSUL_TIMEOUT";

impl Settings {
    /// Resolve every setting from the command line, the environment (which includes `.env`), or the default.
    pub fn resolve(
        options: &Opts,
    ) -> Result<Settings, ProbeError>
    {
        let host = set_option(&options.host, "host", ENV_HOST, || DEFAULT_HOST.to_string());
        if host.is_empty() {
            return Err(ProbeError::Configuration("--host must be set".to_string()));
        }

        // an unknown hostname still results in a request, consul will answer with an empty list.
        let node = set_option(&options.node, "node", ENV_NODE, || local_hostname().unwrap_or_default());

        let service = set_option(&options.service, "service", ENV_SERVICE, || DEFAULT_SERVICE.to_string());
        if service.is_empty() {
            return Err(ProbeError::Configuration("--service must be set".to_string()));
        }

        let timeout = parse_timeout(&set_option(&options.timeout, "timeout", ENV_TIMEOUT, || DEFAULT_TIMEOUT.to_string()))?;

        Ok(Settings {
            host,
            node,
            service,
            timeout,
            accept_invalid_certs: options.accept_invalid_certs,
        })
    }
}

/// Pick the command line value if set, else the environment variable if set, else the default.
pub fn set_option<F>(
    option: &Option<String>,
    name: &str,
    variable: &str,
    default: F,
) -> String
where
    F: FnOnce() -> String,
{
    // is --<name> set?
    if let Some(value) = option {
        info!("{} argument set: using: {}", name, value);
        return value.to_string();
    }
    // is the environment variable set (possibly via dotenv().ok())?
    match env::var(variable) {
        Ok(set_var) => {
            info!("{} not set: set via environment: {}: {}", name, variable, set_var);
            set_var
        }
        Err(_e) => {
            let default_value = default();
            info!("{} not set: and not set via environment: using default: {}", name, default_value);
            default_value
        }
    }
}

fn parse_timeout(
    timeout: &str,
) -> Result<Option<Duration>, ProbeError>
{
    match timeout.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(seconds) => Ok(Some(Duration::from_secs(seconds))),
        Err(_e) => Err(ProbeError::Configuration(format!("--timeout must be a number of seconds, got '{}'", timeout))),
    }
}

pub fn local_hostname() -> Option<String>
{
    match hostname::get() {
        Ok(hostname) => hostname.into_string().ok(),
        Err(e) => {
            warn!("unable to obtain the hostname: {}", e);
            None
        }
    }
}

/// A single GET request; anything other than a 2xx response is an error.
pub fn http_get(
    url: &str,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
) -> Result<String, ProbeError>
{
    let response = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(accept_invalid_certs)
        .timeout(timeout)
        .build()?
        .get(url)
        .send()?;

    if !response.status().is_success() {
        debug!("Non success response: {} = {}", url, response.status());
        return Err(ProbeError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    debug!("Success response: {} = {}", url, response.status());

    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn options(
        arguments: &[&str],
    ) -> Opts
    {
        Opts::parse_from(std::iter::once("check_consul").chain(arguments.iter().copied()))
    }

    #[test]
    fn unit_set_option_prefers_argument() {
        env::set_var("CHECK_CONSUL_UNIT_ARGUMENT", "from-env");
        let value = set_option(&Some("from-argument".to_string()), "host", "CHECK_CONSUL_UNIT_ARGUMENT", || "from-default".to_string());
        assert_eq!(value, "from-argument");
    }

    #[test]
    fn unit_set_option_uses_environment() {
        env::set_var("CHECK_CONSUL_UNIT_ENVIRONMENT", "from-env");
        let value = set_option(&None, "host", "CHECK_CONSUL_UNIT_ENVIRONMENT", || "from-default".to_string());
        assert_eq!(value, "from-env");
    }

    #[test]
    fn unit_set_option_uses_default() {
        env::remove_var("CHECK_CONSUL_UNIT_DEFAULT");
        let value = set_option(&None, "host", "CHECK_CONSUL_UNIT_DEFAULT", || "from-default".to_string());
        assert_eq!(value, "from-default");
    }

    #[test]
    fn unit_resolve_all_arguments() {
        let settings = Settings::resolve(&options(&[
            "--host", "https://consul:8501",
            "--node", "node1",
            "--service", "redis",
            "--timeout", "5",
            "--accept-invalid-certs",
        ])).unwrap();
        assert_eq!(settings, Settings {
            host: "https://consul:8501".to_string(),
            node: "node1".to_string(),
            service: "redis".to_string(),
            timeout: Some(Duration::from_secs(5)),
            accept_invalid_certs: true,
        });
    }

    #[test]
    fn unit_resolve_empty_host() {
        let result = Settings::resolve(&options(&["--host", "", "--node", "node1"]));
        match result {
            Err(ProbeError::Configuration(message)) => assert_eq!(message, "--host must be set"),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn unit_resolve_empty_service() {
        let result = Settings::resolve(&options(&["--host", "http://localhost:8500", "--node", "node1", "--service", ""]));
        match result {
            Err(ProbeError::Configuration(message)) => assert_eq!(message, "--service must be set"),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn unit_resolve_bad_timeout() {
        let result = Settings::resolve(&options(&["--host", "http://localhost:8500", "--node", "node1", "--service", "consul", "--timeout", "ten"]));
        let error = result.unwrap_err();
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "--timeout must be a number of seconds, got 'ten'");
    }

    #[test]
    fn unit_parse_timeout() {
        assert_eq!(parse_timeout("0").unwrap(), None);
        assert_eq!(parse_timeout("30").unwrap(), Some(Duration::from_secs(30)));
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("").is_err());
    }

    #[test]
    fn unit_local_hostname() {
        let hostname = local_hostname().unwrap();
        assert!(!hostname.is_empty());
        assert!(!hostname.contains('\0'));
    }
}
