//! DNS record value types and provider wire formats.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// The record type this crate manages.
pub const TYPE_A: &str = "A";

/// A DNS record as the provider models it.
///
/// `record_id` is `Some` exactly when the record was read back from the
/// provider; it is required for an update and absent for a create. Records
/// are read fresh each run and mutated in memory only to stage a new
/// `value` before an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// The zone the record lives in, e.g. `example.com`.
    pub domain_name: String,
    /// The host label, e.g. `home` for `home.example.com`.
    pub rr: String,
    /// Provider-assigned opaque identifier.
    pub record_id: Option<String>,
    /// Record type; this crate only ever writes `A`.
    pub record_type: String,
    /// Record value, the IPv4 address string.
    pub value: String,
}

impl DnsRecord {
    /// Builds a fresh A record for a name, ready for `AddDomainRecord`.
    #[must_use]
    pub fn new_a(name: &RecordName, value: impl Into<String>) -> Self {
        Self {
            domain_name: name.domain_name().to_owned(),
            rr: name.rr().to_owned(),
            record_id: None,
            record_type: TYPE_A.to_owned(),
            value: value.into(),
        }
    }
}

/// A fully-qualified record name split into host label and zone.
///
/// `home.example.com` splits into `rr = "home"` and
/// `domain_name = "example.com"`. Parsing happens once, at configuration
/// time, so a name that cannot be split is rejected before any network
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName {
    fqdn: String,
    rr: String,
    domain_name: String,
}

impl RecordName {
    /// The full name, e.g. `home.example.com`.
    #[must_use]
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    /// The leftmost label, the provider's `RR`.
    #[must_use]
    pub fn rr(&self) -> &str {
        &self.rr
    }

    /// The remaining labels joined by `.`, the provider's `DomainName`.
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn)
    }
}

/// Error type for record name parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordNameError {
    /// The name has no zone part to the right of the host label.
    #[error("'{0}' needs at least two labels, e.g. home.example.com")]
    MissingZone(String),

    /// The name contains an empty label (leading, trailing, or doubled dot).
    #[error("'{0}' contains an empty label")]
    EmptyLabel(String),
}

impl FromStr for RecordName {
    type Err = RecordNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels: Vec<&str> = s.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return Err(RecordNameError::EmptyLabel(s.to_owned()));
        }
        if labels.len() < 2 {
            return Err(RecordNameError::MissingZone(s.to_owned()));
        }

        Ok(Self {
            fqdn: s.to_owned(),
            rr: labels[0].to_owned(),
            domain_name: labels[1..].join("."),
        })
    }
}

/// `DescribeSubDomainRecords` response body.
///
/// Only the fields the reconciler needs are modeled; the provider sends
/// more (TTL, line, status) and serde ignores them.
#[derive(Debug, Deserialize)]
pub(crate) struct DescribeResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: u64,
    #[serde(rename = "DomainRecords", default)]
    pub domain_records: DomainRecords,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DomainRecords {
    #[serde(rename = "Record", default)]
    pub record: Vec<RecordEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordEntry {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "DomainName", default)]
    pub domain_name: String,
}

impl From<RecordEntry> for DnsRecord {
    fn from(entry: RecordEntry) -> Self {
        Self {
            domain_name: entry.domain_name,
            rr: entry.rr,
            record_id: Some(entry.record_id),
            record_type: entry.record_type,
            value: entry.value,
        }
    }
}
