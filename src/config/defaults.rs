//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the
//! codebase.

use std::time::Duration;

/// Default Alidns API endpoint.
pub const API_ENDPOINT: &str = "http://alidns.aliyuncs.com/";

/// Default public IP lookup endpoint.
pub const LOOKUP_URL: &str = "http://members.3322.org/dyndns/getip";

/// Default HTTP request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
