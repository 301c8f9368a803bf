use crate::AuthConfig;

fn enabled_config() -> AuthConfig {
    AuthConfig {
        enabled: true,
        jwt_secret: Some("0123456789abcdef0123456789abcdef".to_string()),
        ..AuthConfig::default()
    }
}

#[test]
fn given_disabled_auth_when_validated_then_ok_without_secret() {
    let config = AuthConfig::default();

    assert!(config.validate().is_ok());
}

#[test]
fn given_enabled_auth_with_secret_when_validated_then_ok() {
    let config = enabled_config();

    assert!(config.validate().is_ok());
}

#[test]
fn given_enabled_auth_without_secret_when_validated_then_error() {
    let mut config = enabled_config();
    config.jwt_secret = None;

    assert!(config.validate().is_err());
}

#[test]
fn given_short_secret_when_validated_then_error() {
    let mut config = enabled_config();
    config.jwt_secret = Some("too-short".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn given_empty_issuer_when_validated_then_error() {
    let mut config = enabled_config();
    config.issuer = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn given_empty_audience_when_validated_then_error() {
    let mut config = enabled_config();
    config.audience = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn given_zero_lifetime_when_validated_then_error() {
    let mut config = enabled_config();
    config.token_lifetime_secs = 0;

    assert!(config.validate().is_err());
}

#[test]
fn given_zero_lockout_threshold_when_validated_then_error() {
    let mut config = enabled_config();
    config.lockout_max_failures = 0;

    assert!(config.validate().is_err());
}
