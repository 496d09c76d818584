//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// alidns-sync: keep an Alidns A record pointed at the current public IP
///
/// One invocation performs one reconciliation pass; run it from cron or a
/// systemd timer for continuous synchronization.
#[derive(Debug, Parser)]
#[command(name = "alidns-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Fully-qualified record to manage, e.g. home.example.com
    #[arg(long)]
    pub domain: Option<String>,

    /// Alidns access key id
    #[arg(long = "access-key-id", value_name = "ID")]
    pub access_key_id: Option<String>,

    /// Alidns access key secret (prefer ALIDNS_ACCESS_SECRET over this)
    #[arg(long = "access-secret", value_name = "SECRET")]
    pub access_secret: Option<String>,

    /// Alidns API endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Public IP lookup endpoint
    #[arg(long = "lookup-url", value_name = "URL")]
    pub lookup_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Resolve and compare only - log the would-be change without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for alidns-sync
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "alidns-sync.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
