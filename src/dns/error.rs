//! Error types for the DNS gateway.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for provider API calls.
///
/// A failure on `DescribeSubDomainRecords` is fatal for the run: without
/// knowing the current record state the reconciler cannot safely decide
/// between create and update. Failures on the mutating actions end the
/// run's mutation attempt; the next scheduled invocation is the retry.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The API request failed at the network level.
    #[error("DNS API request failed: {0}")]
    Transport(#[source] HttpError),

    /// The API answered with a non-success status.
    #[error("{action} returned HTTP {status}")]
    Status {
        /// The provider action that failed
        action: &'static str,
        /// The status the provider answered with
        status: http::StatusCode,
    },

    /// The response body was not valid UTF-8.
    #[error("{action} response was not valid UTF-8")]
    Encoding {
        /// The provider action that failed
        action: &'static str,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse {action} response: {source}")]
    Parse {
        /// The provider action that failed
        action: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The response claimed records exist but listed none.
    #[error("{action} listed no records despite TotalCount={count}")]
    MissingRecords {
        /// The provider action that failed
        action: &'static str,
        /// The total count the provider reported
        count: u64,
    },

    /// An update was attempted on a record without a provider id.
    #[error("Update requires a record id read back from the provider")]
    MissingRecordId,
}
