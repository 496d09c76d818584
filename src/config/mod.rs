//! Configuration layer for alidns-sync.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - `ALIDNS_DOMAIN`, `ALIDNS_ACCESS_KEY_ID`,
//!    `ALIDNS_ACCESS_SECRET` (required fields only; keeps credentials out
//!    of shell history and crontab lines)
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - API endpoint, lookup endpoint, timeout
//!
//! The required fields (domain, access key id, access secret) have no
//! defaults; a run without them fails before any network call is made.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{
    ENV_ACCESS_KEY_ID, ENV_ACCESS_SECRET, ENV_DOMAIN, ValidatedConfig, write_default_config,
};
