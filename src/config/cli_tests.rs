//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

fn parse(args: &[&str]) -> Cli {
    let mut full_args = vec!["alidns-sync"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

#[test]
fn no_arguments_parses_with_everything_unset() {
    let cli = parse(&[]);

    assert!(cli.command.is_none());
    assert!(cli.domain.is_none());
    assert!(cli.access_key_id.is_none());
    assert!(cli.access_secret.is_none());
    assert!(cli.endpoint.is_none());
    assert!(cli.lookup_url.is_none());
    assert!(cli.timeout.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.dry_run);
    assert!(!cli.verbose);
}

#[test]
fn run_options_parse() {
    let cli = parse(&[
        "--domain",
        "home.example.com",
        "--access-key-id",
        "id",
        "--access-secret",
        "secret",
        "--timeout",
        "5",
        "--dry-run",
        "--verbose",
    ]);

    assert_eq!(cli.domain.as_deref(), Some("home.example.com"));
    assert_eq!(cli.access_key_id.as_deref(), Some("id"));
    assert_eq!(cli.access_secret.as_deref(), Some("secret"));
    assert_eq!(cli.timeout, Some(5));
    assert!(cli.dry_run);
    assert!(cli.verbose);
}

#[test]
fn endpoint_overrides_parse() {
    let cli = parse(&[
        "--endpoint",
        "http://alidns.example.test/",
        "--lookup-url",
        "http://ip.example.test/",
    ]);

    assert_eq!(cli.endpoint.as_deref(), Some("http://alidns.example.test/"));
    assert_eq!(cli.lookup_url.as_deref(), Some("http://ip.example.test/"));
}

#[test]
fn config_path_parses_with_short_flag() {
    let cli = parse(&["-c", "sync.toml"]);

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("sync.toml")));
}

#[test]
fn init_subcommand_parses_with_default_output() {
    let cli = parse(&["init"]);

    assert!(cli.is_init());
    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("alidns-sync.toml"));
        }
        _ => panic!("expected init subcommand"),
    }
}

#[test]
fn init_subcommand_accepts_output_path() {
    let cli = parse(&["init", "--output", "custom.toml"]);

    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("custom.toml"));
        }
        _ => panic!("expected init subcommand"),
    }
}
