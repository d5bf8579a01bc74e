use super::Fixture;
use crate::{
    config::{load_config, ConfigOptions, DEFAULT_NSUPDATE_PATH, DEFAULT_TTL},
    error::{FileKind, UpdateError},
};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

#[test]
fn test_config_deserialization() {
    let fixture = Fixture::new();
    let path = fixture.write(
        "ddns.yaml",
        r#"
            server: "ns1.example.com"
            zone: "example.com"
            domain: "host.example.com"
            private_key_path: "/etc/bind/Kupdate.private"
            nsupdate: "/opt/bind/nsupdate"
            ttl: 300
            ip: "192.0.2.10"
            nsupdate_debug: true
            nsupdate_port: 5353
            nsupdate_timeout: 20
        "#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.server.as_deref(), Some("ns1.example.com"));
    assert_eq!(config.zone.as_deref(), Some("example.com"));
    assert_eq!(config.domain.as_deref(), Some("host.example.com"));
    assert_eq!(
        config.private_key_path,
        Some(PathBuf::from("/etc/bind/Kupdate.private"))
    );
    assert_eq!(config.nsupdate, PathBuf::from("/opt/bind/nsupdate"));
    assert_eq!(config.ttl, Value::from(300));
    assert_eq!(config.ip.as_deref(), Some("192.0.2.10"));
    assert!(config.nsupdate_debug);
    assert_eq!(config.nsupdate_port, Some(Value::from(5353)));
    assert_eq!(config.nsupdate_timeout, Some(Value::from(20)));
}

#[test]
fn test_missing_keys_get_defaults() {
    let fixture = Fixture::new();
    let path = fixture.write("ddns.yaml", "server: ns1.example.com\n");

    let config = load_config(&path).unwrap();
    assert_eq!(config.nsupdate, PathBuf::from(DEFAULT_NSUPDATE_PATH));
    assert_eq!(config.ttl, Value::from(DEFAULT_TTL));
    assert!(!config.nsupdate_debug);
    assert!(config.zone.is_none());
    assert_eq!(
        config,
        ConfigOptions {
            server: Some("ns1.example.com".to_string()),
            ..ConfigOptions::default()
        }
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let fixture = Fixture::new();
    let path = fixture.write("ddns.yaml", "zone: example.com\nretries: 3\n");

    let config = load_config(&path).unwrap();
    assert_eq!(config.zone.as_deref(), Some("example.com"));
}

#[test]
fn test_missing_config_file() {
    let err = load_config(Path::new("/nonexistent/ddns.yaml")).unwrap_err();

    match err {
        UpdateError::FileNotFound { kind, path } => {
            assert_eq!(kind, FileKind::Config);
            assert_eq!(path, PathBuf::from("/nonexistent/ddns.yaml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_directory_is_not_a_config_file() {
    let fixture = Fixture::new();
    let err = load_config(fixture.dir.path()).unwrap_err();
    assert!(matches!(
        err,
        UpdateError::FileNotFound {
            kind: FileKind::Config,
            ..
        }
    ));
}

#[test]
fn test_numeric_keys_kept_as_written() {
    let fixture = Fixture::new();
    let path = fixture.write("ddns.yaml", "ttl: \"60\"\nnsupdate_port: 1.5\n");

    let config = load_config(&path).unwrap();
    assert_eq!(config.ttl, Value::from("60"));
    assert_eq!(config.nsupdate_port, Some(Value::from(1.5)));
}

#[test]
fn test_invalid_config() {
    let fixture = Fixture::new();
    let path = fixture.write("ddns.yaml", "zone: [not, a, string]\n");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, UpdateError::ConfigParse { .. }));
}
