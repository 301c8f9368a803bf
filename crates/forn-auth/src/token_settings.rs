use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use forn_core::ErrorLocation;

/// HS256 secrets below this length are rejected
pub const MIN_SECRET_BYTES: usize = 32;

/// Everything the issuer needs to mint tokens
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub lifetime_secs: u64,
}

impl TokenSettings {
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(AuthError::Configuration {
                message: format!("secret must be at least {} bytes", MIN_SECRET_BYTES),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.issuer.is_empty() {
            return Err(AuthError::Configuration {
                message: "issuer cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.audience.is_empty() {
            return Err(AuthError::Configuration {
                message: "audience cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.lifetime_secs == 0 {
            return Err(AuthError::Configuration {
                message: "token lifetime must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
