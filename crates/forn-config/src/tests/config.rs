use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.auth.enabled, eq(false));
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_DATABASE_MAX_CONNECTIONS)
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [auth]
            enabled = false

            [database]
            path = "custom.db"
        "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.database.path.as_str(), eq("custom.db"));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000
        "#,
    )
    .unwrap();
    let _port = EnvGuard::set("FORN_SERVER_PORT", "9100");
    let _secret = EnvGuard::set(
        "FORN_AUTH_JWT_SECRET",
        "0123456789abcdef0123456789abcdef",
    );
    let _enabled = EnvGuard::set("FORN_AUTH_ENABLED", "true");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(config.auth.enabled, eq(true));
    assert_that!(config.validate(), ok(anything()));
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = oops").unwrap();

    // When
    let result = Config::load();

    // Then
    assert!(result.is_err());
}

#[test]
#[serial]
fn given_absolute_database_path_when_validated_then_error() {
    // Given
    let _temp = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.database.path = "/etc/fornecedor.db".to_string();

    // When
    let result = config.validate();

    // Then
    assert!(result.is_err());
}

#[test]
#[serial]
fn given_parent_escape_in_database_path_when_validated_then_error() {
    // Given
    let _temp = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.database.path = "../outside.db".to_string();

    // When
    let result = config.validate();

    // Then
    assert!(result.is_err());
}

#[test]
#[serial]
fn given_auth_enabled_without_secret_when_validated_then_error() {
    // Given
    let _temp = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.auth.enabled = true;
    config.auth.jwt_secret = None;

    // When
    let result = config.validate();

    // Then
    assert!(result.is_err());
}
