use crate::config::{load_config, Paths, APP_DIR};
use crate::error::ConfigError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_deserialization() {
    let dir = TempDir::new().unwrap();
    let paths = Paths::new(dir.path());
    fs::write(
        paths.config_file(),
        r#"{
            "api_key": "secret",
            "api_email": "user@example.com",
            "zone_id": "zone-1",
            "domain": ["home.example.com", "nas.example.com"],
            "api_endpoint": "https://api.cloudflare.com/client/v4/zones/%s/dns_records",
            "record_type": "A"
        }"#,
    )
    .unwrap();

    let config = load_config(&paths.config_file()).unwrap();
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.api_email, "user@example.com");
    assert_eq!(config.zone_id, "zone-1");
    assert_eq!(config.domain, vec!["home.example.com", "nas.example.com"]);
    assert_eq!(
        config.api_endpoint,
        "https://api.cloudflare.com/client/v4/zones/%s/dns_records"
    );
    assert_eq!(config.record_type, "A");
}

#[test]
fn test_missing_fields_are_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"zone_id": "zone-1"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.zone_id, "zone-1");
    assert!(config.api_key.is_empty());
    assert!(config.domain.is_empty());
    assert!(config.record_type.is_empty());
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config(&dir.path().join("config.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, "api_key: not json").unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));

    fs::write(&path, r#"{"domain": "home.example.com"}"#).unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_debug_redacts_api_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"api_key": "very-secret-key"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert!(!format!("{config:?}").contains("very-secret-key"));
}

#[test]
fn test_paths_layout() {
    let paths = Paths::new("/srv/ddns");
    assert_eq!(paths.config_file(), std::path::Path::new("/srv/ddns/config.json"));
    assert_eq!(paths.log_dir(), std::path::Path::new("/srv/ddns/logs"));

    if let Ok(home) = Paths::from_home() {
        assert!(home.root().ends_with(APP_DIR));
    }
}
