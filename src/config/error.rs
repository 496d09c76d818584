//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::dns::RecordNameError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI, environment,
    /// or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The configured domain cannot be split into host label and zone.
    #[error("Invalid domain: {0}")]
    InvalidDomain(#[from] RecordNameError),

    /// Invalid duration value (zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The managed record name field.
    pub const DOMAIN: &str = "domain";
    /// The Alidns access key id field.
    pub const ACCESS_KEY_ID: &str = "access_key_id";
    /// The Alidns access key secret field.
    pub const ACCESS_SECRET: &str = "access_secret";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
