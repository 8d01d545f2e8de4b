//! Module for turning the health checks of a node into a plugin report.
//!
//! The checks of the requested service are put in a bucket per status.
//! Only the most severe non-empty bucket is reported: critical, then warning, then passing.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
