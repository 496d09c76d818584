//! Validated configuration after merging CLI, environment, and TOML
//! sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction,
//! before any network call is attempted.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::dns::RecordName;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Environment variable supplying the managed record name.
pub const ENV_DOMAIN: &str = "ALIDNS_DOMAIN";
/// Environment variable supplying the access key id.
pub const ENV_ACCESS_KEY_ID: &str = "ALIDNS_ACCESS_KEY_ID";
/// Environment variable supplying the access key secret.
pub const ENV_ACCESS_SECRET: &str = "ALIDNS_ACCESS_SECRET";

/// Fully validated configuration ready for use by the application.
///
/// All required fields are present, URLs are parsed, and the record name
/// is already split into host label and zone.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to resolve from CLI args, environment,
/// and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The record to manage, split into RR and zone
    pub record: RecordName,

    /// Alidns access key id
    pub access_key_id: String,

    /// Alidns access key secret
    pub access_secret: String,

    /// Alidns API endpoint
    pub endpoint: Url,

    /// Public IP lookup endpoint
    pub lookup_url: Url,

    /// HTTP request timeout
    pub timeout: Duration,

    /// Dry-run mode (log the would-be change without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    // The access secret is deliberately absent here; this string is logged
    // at startup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ domain: {}, access_key_id: {}, endpoint: {}, lookup: {}, timeout: {}s, \
             dry_run: {} }}",
            self.record,
            self.access_key_id,
            self.endpoint,
            self.lookup_url,
            self.timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Loads and merges configuration from CLI, environment, and optional
    /// config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid or incomplete
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config, reading overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the domain cannot
    /// be split, a URL is invalid, or the timeout is zero.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Self::from_raw_with_env(cli, toml, |name| std::env::var(name).ok())
    }

    /// Creates a validated configuration with an injected environment
    /// lookup (useful for testing).
    ///
    /// # Errors
    ///
    /// Same as [`ValidatedConfig::from_raw`].
    pub fn from_raw_with_env(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let record = Self::resolve_domain(cli, toml, &env)?;

        let access_key_id = resolve_required(
            cli.access_key_id.clone(),
            env(ENV_ACCESS_KEY_ID),
            toml.and_then(|t| t.credentials.access_key_id.clone()),
            field::ACCESS_KEY_ID,
            "Use --access-key-id, set ALIDNS_ACCESS_KEY_ID, or set credentials.access_key_id in the config file",
        )?;

        let access_secret = resolve_required(
            cli.access_secret.clone(),
            env(ENV_ACCESS_SECRET),
            toml.and_then(|t| t.credentials.access_secret.clone()),
            field::ACCESS_SECRET,
            "Set ALIDNS_ACCESS_SECRET, or set credentials.access_secret in the config file",
        )?;

        let endpoint = resolve_url(
            cli.endpoint.clone(),
            toml.and_then(|t| t.dns.endpoint.clone()),
            defaults::API_ENDPOINT,
            "endpoint",
        )?;

        let lookup_url = resolve_url(
            cli.lookup_url.clone(),
            toml.and_then(|t| t.lookup.url.clone()),
            defaults::LOOKUP_URL,
            "lookup url",
        )?;

        let timeout = resolve_timeout(cli, toml)?;

        Ok(Self {
            record,
            access_key_id,
            access_secret,
            endpoint,
            lookup_url,
            timeout,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    fn resolve_domain(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: &impl Fn(&str) -> Option<String>,
    ) -> Result<RecordName, ConfigError> {
        let domain = cli
            .domain
            .clone()
            .or_else(|| env(ENV_DOMAIN))
            .or_else(|| toml.and_then(|t| t.dns.domain.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::DOMAIN,
                    "Use --domain, set ALIDNS_DOMAIN, or set dns.domain in the config file",
                )
            })?;

        Ok(domain.parse()?)
    }
}

fn resolve_required(
    cli: Option<String>,
    env: Option<String>,
    toml: Option<String>,
    field: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    cli.or(env)
        .or(toml)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::missing(field, hint))
}

fn resolve_url(
    cli: Option<String>,
    toml: Option<String>,
    default: &str,
    field: &'static str,
) -> Result<Url, ConfigError> {
    let raw = cli.or(toml).unwrap_or_else(|| default.to_owned());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        field,
        url: raw,
        reason: e.to_string(),
    })
}

fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
    let secs = cli
        .timeout
        .or_else(|| toml.and_then(|t| t.http.timeout))
        .unwrap_or(defaults::TIMEOUT_SECS);

    if secs == 0 {
        return Err(ConfigError::InvalidDuration {
            field: "timeout",
            reason: "must be greater than zero".to_owned(),
        });
    }

    Ok(Duration::from_secs(secs))
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
