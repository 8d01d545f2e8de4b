//! Utilities: settings resolution, the local hostname and the http request.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
