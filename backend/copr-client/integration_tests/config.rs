use copr_client::{ConfigError, CoprConfiguration};

use std::fs;

use tempfile::TempDir;

/// **VALUE**: Verifies loading a configuration file from an explicit path.
///
/// **WHY THIS MATTERS**: `-c/--config` is how users keep separate profiles for
/// several Copr instances; the explicit path must win over the default location.
#[test]
fn given_config_file_when_loaded_from_path_then_returns_configuration() {
    // GIVEN: A config file in a temporary directory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("staging.toml");
    fs::write(
        &path,
        "[copr-cli]\nusername = \"alice\"\ncopr_url = \"http://copr.staging.example\"\n",
    )
    .unwrap();

    // WHEN: Loading it explicitly
    let config = CoprConfiguration::load(Some(&path)).unwrap();

    // THEN: Values come from that file
    assert_eq!(config.username(), "alice");
    assert_eq!(config.base_url().host_str(), Some("copr.staging.example"));
}

#[test]
fn given_missing_file_when_loaded_then_returns_not_found_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = CoprConfiguration::load(Some(&path));

    match result {
        Err(ConfigError::NotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_directory_instead_of_file_when_loaded_then_returns_read_error() {
    let dir = TempDir::new().unwrap();

    let result = CoprConfiguration::load(Some(dir.path()));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn given_default_path_when_resolved_then_ends_with_copr_toml() {
    // Platforms without a config dir report an error instead of guessing.
    if let Ok(path) = CoprConfiguration::default_path() {
        assert!(path.ends_with("copr.toml"));
    }
}
