//! Module for reading `/v1/health/node/<node>` from the Consul http api.
//!
//! The endpoint returns a json array with all the health checks registered against a node:
//! - the node level checks, such as `serfHealth`, which have an empty `ServiceID`.
//! - the service level checks, which carry the `ServiceID` and `ServiceName` of the service.
//!
//! Each check has a `Status` of `passing`, `warning` or `critical`.
//! Consul also knows `maintenance`, which is not one of the three and is ignored by the report.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
