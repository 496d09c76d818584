//! Reconciler orchestrating resolver and gateway.

use thiserror::Error;

use crate::dns::{DnsGateway, DnsRecord, GatewayError, RecordName};
use crate::ip::{IpResolver, PublicIp, ResolveError};

/// Terminal outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record already points at the current IP; nothing was sent.
    InSync {
        /// The resolved public IP
        ip: PublicIp,
    },
    /// An existing record was pointed at the new IP.
    Updated {
        /// The value the record held before the update
        previous: String,
        /// The resolved public IP the record now holds
        ip: PublicIp,
    },
    /// No record existed; one was created.
    Created {
        /// The resolved public IP the new record holds
        ip: PublicIp,
    },
}

/// Error type for a reconciliation pass.
///
/// Every variant ends the run; re-invocation by the external scheduler is
/// the only retry mechanism.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The public IP could not be resolved; there is nothing to compare
    /// against, so no provider call is made.
    #[error("Failed to resolve the current public IP: {0}")]
    IpLookup(#[source] ResolveError),

    /// The current record state could not be fetched; without it the
    /// create-vs-update decision cannot be made safely.
    #[error("Failed to fetch the current record state: {0}")]
    FetchRecord(#[source] GatewayError),

    /// The create call failed.
    #[error("Failed to create the record: {0}")]
    CreateRecord(#[source] GatewayError),

    /// The update call failed.
    #[error("Failed to update the record: {0}")]
    UpdateRecord(#[source] GatewayError),
}

/// Drives one reconciliation pass: resolve the public IP, fetch the
/// record, and create or update it when the two diverge.
///
/// Strictly sequential; each call completes before the next begins, and
/// nothing is cached across passes; the provider's answer is the sole
/// source of truth every time.
pub struct Reconciler<R, G> {
    resolver: R,
    gateway: G,
    name: RecordName,
}

impl<R, G> Reconciler<R, G> {
    /// Creates a reconciler for the given record name.
    #[must_use]
    pub const fn new(resolver: R, gateway: G, name: RecordName) -> Self {
        Self {
            resolver,
            gateway,
            name,
        }
    }
}

impl<R: IpResolver, G: DnsGateway> Reconciler<R, G> {
    /// Runs one pass and returns the terminal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when the IP lookup, the record fetch, or the
    /// chosen mutation fails.
    pub async fn run(&self) -> Result<Outcome, SyncError> {
        let ip = self
            .resolver
            .current()
            .await
            .map_err(SyncError::IpLookup)?;
        tracing::debug!("current public IP is {ip}");

        let existing = self
            .gateway
            .describe_record(self.name.fqdn())
            .await
            .map_err(SyncError::FetchRecord)?;

        match existing {
            None => self.create(ip).await,
            Some(record) if record.value == ip.as_str() => {
                tracing::info!("record {} already points at {ip}", self.name);
                Ok(Outcome::InSync { ip })
            }
            Some(record) => self.update(record, ip).await,
        }
    }

    async fn create(&self, ip: PublicIp) -> Result<Outcome, SyncError> {
        let record = DnsRecord::new_a(&self.name, ip.as_str());
        tracing::info!("no record for {}; creating one with {ip}", self.name);

        self.gateway
            .add_record(&record)
            .await
            .map_err(SyncError::CreateRecord)?;

        tracing::info!("created record {} -> {ip}", self.name);
        Ok(Outcome::Created { ip })
    }

    async fn update(&self, mut record: DnsRecord, ip: PublicIp) -> Result<Outcome, SyncError> {
        let previous = std::mem::replace(&mut record.value, ip.as_str().to_owned());
        tracing::info!(
            "record {} points at {previous}; updating to {ip}",
            self.name
        );

        self.gateway
            .update_record(&record)
            .await
            .map_err(SyncError::UpdateRecord)?;

        tracing::info!("updated record {} -> {ip}", self.name);
        Ok(Outcome::Updated { previous, ip })
    }
}
