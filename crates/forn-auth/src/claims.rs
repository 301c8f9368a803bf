use crate::{AuthError, Result as AuthErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use forn_core::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claim names the issuer populates itself. User-granted claims with one
/// of these names are dropped rather than allowed to shadow the standard
/// set.
pub const RESERVED_CLAIM_NAMES: &[&str] = &[
    "sub", "email", "jti", "iss", "aud", "iat", "nbf", "exp", "roles",
];

/// JWT claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    pub email: String,
    /// Unique token identifier
    pub jti: String,
    pub iss: String,
    pub aud: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Not valid before timestamp (Unix)
    pub nbf: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// User roles, sorted and deduplicated
    #[serde(default)]
    pub roles: Vec<String>,
    /// User-granted claims, flattened into the token payload
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be later than iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
