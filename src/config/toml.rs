//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Managed record configuration section
    #[serde(default)]
    pub dns: DnsSection,

    /// Alidns credential section
    #[serde(default)]
    pub credentials: CredentialsSection,

    /// Public IP lookup configuration section
    #[serde(default)]
    pub lookup: LookupSection,

    /// HTTP transport configuration section
    #[serde(default)]
    pub http: HttpSection,
}

/// Managed record configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsSection {
    /// Fully-qualified record to manage, e.g. "home.example.com"
    pub domain: Option<String>,

    /// Alidns API endpoint
    pub endpoint: Option<String>,
}

/// Alidns credential section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    /// Alidns access key id
    pub access_key_id: Option<String>,

    /// Alidns access key secret
    pub access_secret: Option<String>,
}

/// Public IP lookup configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    /// Lookup endpoint returning the caller's IP as plain text
    pub url: Option<String>,
}

/// HTTP transport configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# alidns-sync configuration file

[dns]
# Fully-qualified record to manage (required)
# The leftmost label becomes the record's RR, the rest the zone:
# "home.example.com" manages RR "home" in zone "example.com".
# domain = "home.example.com"

# Alidns API endpoint (default: http://alidns.aliyuncs.com/)
# endpoint = "http://alidns.aliyuncs.com/"

[credentials]
# Alidns access key pair (required)
# Both can also come from the ALIDNS_ACCESS_KEY_ID and
# ALIDNS_ACCESS_SECRET environment variables, which take precedence
# over this file.
# access_key_id = "your-key-id"
# access_secret = "your-key-secret"

[lookup]
# Public IP lookup endpoint returning the address as plain text
# (default: http://members.3322.org/dyndns/getip)
# url = "http://members.3322.org/dyndns/getip"

[http]
# Request timeout in seconds (default: 10)
# timeout = 10
"#
    .to_string()
}
