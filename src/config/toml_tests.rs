//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [dns]
            domain = "home.example.com"

            [credentials]
            access_key_id = "id"
            access_secret = "secret"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.dns.domain.as_deref(), Some("home.example.com"));
        assert_eq!(config.credentials.access_key_id.as_deref(), Some("id"));
        assert_eq!(config.credentials.access_secret.as_deref(), Some("secret"));
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [dns]
            domain = "home.example.com"
            endpoint = "http://alidns.example.test/"

            [credentials]
            access_key_id = "id"
            access_secret = "secret"

            [lookup]
            url = "http://ip.example.test/"

            [http]
            timeout = 30
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.dns.endpoint.as_deref(), Some("http://alidns.example.test/"));
        assert_eq!(config.lookup.url.as_deref(), Some("http://ip.example.test/"));
        assert_eq!(config.http.timeout, Some(30));
    }

    #[test]
    fn empty_config_parses_with_all_sections_defaulted() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.dns.domain.is_none());
        assert!(config.credentials.access_key_id.is_none());
        assert!(config.lookup.url.is_none());
        assert!(config.http.timeout.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            [dns]
            domain = "home.example.com"
            nonsense = true
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let toml = r#"
            [webhook]
            url = "https://example.com"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(TomlConfig::parse("not toml at all [").is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_a_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[dns]\ndomain = \"home.example.com\"\n"
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.dns.domain.as_deref(), Some("home.example.com"));
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let err = TomlConfig::load(std::path::Path::new("/nonexistent/alidns-sync.toml"))
            .unwrap_err();

        assert!(matches!(err, super::super::ConfigError::FileRead { .. }));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();

        assert!(TomlConfig::parse(&template).is_ok());
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        assert!(template.contains("[dns]"));
        assert!(template.contains("[credentials]"));
        assert!(template.contains("[lookup]"));
        assert!(template.contains("[http]"));
    }
}
