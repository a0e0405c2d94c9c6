//! Constants for the srcgraph API client

/// User-Agent header value for the API client
pub const USER_AGENT: &str = concat!("srcgraph/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the API
pub const ACCEPT: &str = "application/json";
