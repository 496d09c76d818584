//! One reconciliation pass wired from validated configuration.
//!
//! This module builds the HTTP client, resolver, signer, and gateway, then
//! drives a single [`Reconciler`] pass. The reconciler logs each outcome;
//! this layer only translates errors into the process exit path.

use thiserror::Error;

use alidns_sync::config::ValidatedConfig;
use alidns_sync::dns::{AlidnsGateway, DryRunGateway};
use alidns_sync::ip::HttpIpResolver;
use alidns_sync::signer::RequestSigner;
use alidns_sync::sync::{Reconciler, SyncError};
use alidns_sync::transport::ReqwestClient;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The reconciliation pass failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Executes one reconciliation pass.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the pass fails
/// at any step (IP lookup, record fetch, mutation).
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = http_client(&config)?;

    let resolver = HttpIpResolver::new(client.clone(), config.lookup_url.clone());
    let signer = RequestSigner::new(config.access_key_id.clone(), config.access_secret.clone());
    let gateway = AlidnsGateway::new(client, signer, config.endpoint.clone());

    let outcome = if config.dry_run {
        tracing::info!("Dry-run mode enabled - changes will be logged but not sent");
        Reconciler::new(resolver, DryRunGateway::new(gateway), config.record)
            .run()
            .await?
    } else {
        Reconciler::new(resolver, gateway, config.record).run().await?
    };

    tracing::debug!(?outcome, "reconciliation pass finished");
    Ok(())
}

/// Builds the shared HTTP client with the configured request timeout.
fn http_client(config: &ValidatedConfig) -> Result<ReqwestClient, RunError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(RunError::HttpClient)?;

    Ok(ReqwestClient::from_client(client))
}
