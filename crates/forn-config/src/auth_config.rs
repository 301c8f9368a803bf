use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_LOCKOUT_MAX_FAILURES,
    DEFAULT_LOCKOUT_SECS, DEFAULT_TOKEN_AUDIENCE, DEFAULT_TOKEN_ISSUER,
    DEFAULT_TOKEN_LIFETIME_SECS, MIN_JWT_SECRET_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When false, the auth endpoints are not mounted at all
    pub enabled: bool,
    /// HS256 signing secret; required when enabled
    pub jwt_secret: Option<String>,
    pub issuer: String,
    pub audience: String,
    pub token_lifetime_secs: u64,
    /// Failed logins before a timed lockout engages
    pub lockout_max_failures: i32,
    pub lockout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            issuer: String::from(DEFAULT_TOKEN_ISSUER),
            audience: String::from(DEFAULT_TOKEN_AUDIENCE),
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            lockout_max_failures: DEFAULT_LOCKOUT_MAX_FAILURES,
            lockout_secs: DEFAULT_LOCKOUT_SECS,
        }
    }
}

impl AuthConfig {
    /// Validate signing settings. A failure here is a deployment
    /// misconfiguration: the server refuses to start rather than serve
    /// auth traffic it cannot sign tokens for.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required when auth.enabled = true",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.issuer.is_empty() {
            return Err(ConfigError::auth("auth.issuer cannot be empty"));
        }

        if self.audience.is_empty() {
            return Err(ConfigError::auth("auth.audience cannot be empty"));
        }

        if self.token_lifetime_secs == 0 {
            return Err(ConfigError::auth("auth.token_lifetime_secs must be > 0"));
        }

        if self.lockout_max_failures < 1 {
            return Err(ConfigError::auth(format!(
                "auth.lockout_max_failures must be >= 1, got {}",
                self.lockout_max_failures
            )));
        }

        Ok(())
    }
}
