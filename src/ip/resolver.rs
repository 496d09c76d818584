//! Public IP resolver trait and HTTP implementation.

use std::fmt;

use thiserror::Error;

use crate::transport::{HttpClient, HttpError, HttpRequest};

/// The caller's public IP address as reported by a lookup service.
///
/// Held as an opaque trimmed string: the reconciler only ever compares it
/// against the record value the provider returns, so no address-syntax
/// validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIp(String);

impl PublicIp {
    /// Wraps a lookup response body, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for public IP discovery.
///
/// Any variant is fatal for the current run: without a current IP there is
/// nothing to reconcile against, and retrying is the scheduler's job.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The lookup request failed at the network level.
    #[error("IP lookup request failed: {0}")]
    Transport(#[source] HttpError),

    /// The lookup service answered with a non-success status.
    #[error("IP lookup service returned HTTP {0}")]
    Status(http::StatusCode),

    /// The lookup response body was not valid UTF-8.
    #[error("IP lookup response was not valid UTF-8")]
    Encoding,
}

/// Trait for resolving the caller's current public IP.
///
/// Implementations must not retry internally; a failure ends the run and
/// the next scheduled invocation is the retry mechanism.
pub trait IpResolver: Send + Sync {
    /// Returns the current public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the lookup service is unreachable,
    /// answers with an error status, or returns an undecodable body.
    fn current(&self) -> impl std::future::Future<Output = Result<PublicIp, ResolveError>> + Send;
}

/// Resolver that asks an HTTP lookup service.
///
/// The service contract is minimal: GET the endpoint, read the body as
/// text, trim. Any 2xx body is accepted as the address.
#[derive(Debug, Clone)]
pub struct HttpIpResolver<H> {
    client: H,
    url: url::Url,
}

impl<H> HttpIpResolver<H> {
    /// Creates a resolver for the given lookup endpoint.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured lookup endpoint.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> IpResolver for HttpIpResolver<H> {
    async fn current(&self) -> Result<PublicIp, ResolveError> {
        let response = self
            .client
            .request(HttpRequest::get(self.url.clone()))
            .await
            .map_err(ResolveError::Transport)?;

        if !response.is_success() {
            return Err(ResolveError::Status(response.status));
        }

        let body = response.body_text().ok_or(ResolveError::Encoding)?;
        Ok(PublicIp::new(body))
    }
}
