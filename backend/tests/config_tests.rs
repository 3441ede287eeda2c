//! Tests for configuration loading and the source factory.

mod support;

use elt_rust::db::{SourceFactory, SourceType, TrackerConfig};

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_file(
        dir.path(),
        "tracker.toml",
        "[source]\ntype = \"json\"\npath = \"bills.json\"\n\n[server]\nport = 9100\n",
    );

    support::with_scoped_env(
        &[
            ("ELT_CONFIG", path.to_str()),
            ("HOST", None),
            ("PORT", None),
        ],
        || {
            let config = TrackerConfig::load().unwrap();
            assert_eq!(config.source_type().unwrap(), SourceType::Json);
            assert_eq!(config.bind_address(), "0.0.0.0:9100");
        },
    );
}

#[test]
fn test_host_and_port_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_file(dir.path(), "tracker.toml", "[server]\nport = 9100\n");

    support::with_scoped_env(
        &[
            ("ELT_CONFIG", path.to_str()),
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("7000")),
        ],
        || {
            let config = TrackerConfig::load().unwrap();
            assert_eq!(config.bind_address(), "127.0.0.1:7000");
        },
    );
}

#[test]
fn test_invalid_port_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_file(dir.path(), "tracker.toml", "");

    support::with_scoped_env(
        &[("ELT_CONFIG", path.to_str()), ("PORT", Some("http"))],
        || {
            let err = TrackerConfig::load().unwrap_err();
            assert!(err.message().contains("PORT"));
        },
    );
}

#[test]
fn test_broken_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_file(dir.path(), "tracker.toml", "[source\n");

    support::with_scoped_env(&[("ELT_CONFIG", path.to_str())], || {
        assert!(TrackerConfig::load().is_err());
    });
}

#[test]
fn test_from_env_settings() {
    support::with_scoped_env(
        &[
            ("ELT_SOURCE_TYPE", Some("json")),
            ("ELT_DATA_PATH", Some("/data/bills.json")),
        ],
        || {
            let config = TrackerConfig::from_env();
            assert_eq!(config.source_type().unwrap(), SourceType::Json);
            assert_eq!(
                config.source.path.as_deref(),
                Some(std::path::Path::new("/data/bills.json"))
            );

            let source = SourceFactory::from_env().unwrap();
            assert_eq!(source.describe(), "json:/data/bills.json");
        },
    );
}

#[test]
fn test_source_type_from_env_default() {
    support::with_scoped_env(
        &[("ELT_SOURCE_TYPE", None), ("ELT_DATA_PATH", None)],
        || {
            assert_eq!(SourceType::from_env(), SourceType::Memory);
        },
    );

    support::with_scoped_env(
        &[("ELT_SOURCE_TYPE", None), ("ELT_DATA_PATH", Some("bills.json"))],
        || {
            assert_eq!(SourceType::from_env(), SourceType::Json);
        },
    );
}

#[test]
fn test_open_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let data = support::write_file(dir.path(), "bills.json", support::SAMPLE_EXPORT);
    let mut config = TrackerConfig::default();
    config.source.path = Some(data);

    let store = elt_rust::db::open_store(&config).unwrap();
    assert_eq!(store.snapshot().unwrap().records.len(), 5);
}
