//! Gateway trait and Alidns implementation.

use crate::signer::{NonceSource, RequestSigner, UuidNonce};
use crate::time::{Clock, SystemClock};
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

use super::error::GatewayError;
use super::record::{DescribeResponse, DnsRecord};

const ACTION_DESCRIBE: &str = "DescribeSubDomainRecords";
const ACTION_UPDATE: &str = "UpdateDomainRecord";
const ACTION_ADD: &str = "AddDomainRecord";

/// Trait covering the three provider actions the reconciler needs.
///
/// Implementations perform exactly one API call per operation: no
/// internal retries, no caching of provider state between calls.
pub trait DnsGateway: Send + Sync {
    /// Fetches the record for a subdomain.
    ///
    /// Returns `Ok(None)` when the provider reports no record, a normal
    /// outcome distinct from a failed fetch.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the call fails at the network level,
    /// answers with an error status, or the body cannot be parsed.
    fn describe_record(
        &self,
        subdomain: &str,
    ) -> impl std::future::Future<Output = Result<Option<DnsRecord>, GatewayError>> + Send;

    /// Points an existing record at a new value.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the record has no id or the call does
    /// not come back 2xx.
    fn update_record(
        &self,
        record: &DnsRecord,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the call does not come back 2xx.
    fn add_record(
        &self,
        record: &DnsRecord,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;
}

/// Production gateway issuing signed GETs against the Alidns endpoint.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation
/// - `C`, `N`: clock and nonce source forwarded to the signer
pub struct AlidnsGateway<H, C = SystemClock, N = UuidNonce> {
    client: H,
    signer: RequestSigner<C, N>,
    endpoint: url::Url,
}

impl<H, C, N> AlidnsGateway<H, C, N> {
    /// Creates a gateway for the given endpoint.
    #[must_use]
    pub const fn new(client: H, signer: RequestSigner<C, N>, endpoint: url::Url) -> Self {
        Self {
            client,
            signer,
            endpoint,
        }
    }

    /// Returns the configured API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl<H, C, N> AlidnsGateway<H, C, N>
where
    H: HttpClient,
    C: Clock,
    N: NonceSource,
{
    /// Signs the parameters and issues the GET.
    async fn call(&self, params: &[(&str, &str)]) -> Result<HttpResponse, GatewayError> {
        let signed = self.signer.sign(&http::Method::GET, params);

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(signed.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        self.client
            .request(HttpRequest::get(url))
            .await
            .map_err(GatewayError::Transport)
    }

    fn expect_success(action: &'static str, response: &HttpResponse) -> Result<(), GatewayError> {
        if response.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Status {
                action,
                status: response.status,
            })
        }
    }
}

impl<H, C, N> DnsGateway for AlidnsGateway<H, C, N>
where
    H: HttpClient,
    C: Clock,
    N: NonceSource,
{
    async fn describe_record(&self, subdomain: &str) -> Result<Option<DnsRecord>, GatewayError> {
        let response = self
            .call(&[("Action", ACTION_DESCRIBE), ("SubDomain", subdomain)])
            .await?;
        Self::expect_success(ACTION_DESCRIBE, &response)?;

        let body = response.body_text().ok_or(GatewayError::Encoding {
            action: ACTION_DESCRIBE,
        })?;
        let parsed: DescribeResponse =
            serde_json::from_str(body).map_err(|source| GatewayError::Parse {
                action: ACTION_DESCRIBE,
                source,
            })?;

        if parsed.total_count == 0 {
            return Ok(None);
        }

        parsed
            .domain_records
            .record
            .into_iter()
            .next()
            .map(|entry| Some(DnsRecord::from(entry)))
            .ok_or(GatewayError::MissingRecords {
                action: ACTION_DESCRIBE,
                count: parsed.total_count,
            })
    }

    async fn update_record(&self, record: &DnsRecord) -> Result<(), GatewayError> {
        let record_id = record
            .record_id
            .as_deref()
            .ok_or(GatewayError::MissingRecordId)?;

        let response = self
            .call(&[
                ("Action", ACTION_UPDATE),
                ("RecordId", record_id),
                ("RR", &record.rr),
                ("Type", &record.record_type),
                ("Value", &record.value),
            ])
            .await?;

        Self::expect_success(ACTION_UPDATE, &response)
    }

    async fn add_record(&self, record: &DnsRecord) -> Result<(), GatewayError> {
        let response = self
            .call(&[
                ("Action", ACTION_ADD),
                ("DomainName", &record.domain_name),
                ("RR", &record.rr),
                ("Type", &record.record_type),
                ("Value", &record.value),
            ])
            .await?;

        Self::expect_success(ACTION_ADD, &response)
    }
}

/// Decorator that suppresses mutations for dry runs.
///
/// Describe passes through so the reconciler still sees real provider
/// state; update and add log the call that would have been made and report
/// success without touching the network.
pub struct DryRunGateway<G> {
    inner: G,
}

impl<G> DryRunGateway<G> {
    /// Wraps a gateway.
    #[must_use]
    pub const fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: DnsGateway> DnsGateway for DryRunGateway<G> {
    async fn describe_record(&self, subdomain: &str) -> Result<Option<DnsRecord>, GatewayError> {
        self.inner.describe_record(subdomain).await
    }

    async fn update_record(&self, record: &DnsRecord) -> Result<(), GatewayError> {
        tracing::info!(
            "[dry-run] would update record {} ({}.{}) to {}",
            record.record_id.as_deref().unwrap_or("?"),
            record.rr,
            record.domain_name,
            record.value
        );
        Ok(())
    }

    async fn add_record(&self, record: &DnsRecord) -> Result<(), GatewayError> {
        tracing::info!(
            "[dry-run] would add record {}.{} -> {}",
            record.rr,
            record.domain_name,
            record.value
        );
        Ok(())
    }
}
