use crate::claims::RESERVED_CLAIM_NAMES;
use crate::{AuthError, Claims, IssuedToken, Result as AuthErrorResult, TokenSettings};

use forn_core::{ErrorLocation, UserIdentity};

use std::collections::BTreeMap;
use std::panic::Location;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Mints HS256 bearer tokens for authenticated users
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    lifetime_secs: u64,
}

impl TokenIssuer {
    /// Build an issuer from validated settings
    #[track_caller]
    pub fn from_settings(settings: &TokenSettings) -> AuthErrorResult<Self> {
        settings.validate()?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            lifetime_secs: settings.lifetime_secs,
        })
    }

    /// Issue a token for `identity`. Roles are sorted and deduplicated;
    /// user-granted claims whose name collides with a standard claim are
    /// dropped.
    #[track_caller]
    pub fn issue(&self, identity: &UserIdentity) -> AuthErrorResult<IssuedToken> {
        let claims = self.build_claims(identity);
        claims.validate()?;

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(IssuedToken {
            access_token: token,
            token_type: "Bearer",
            expires_in: self.lifetime_secs,
        })
    }

    fn build_claims(&self, identity: &UserIdentity) -> Claims {
        let now = chrono::Utc::now().timestamp();

        let mut roles = identity.roles.clone();
        roles.sort();
        roles.dedup();

        let extra: BTreeMap<String, String> = identity
            .claims
            .iter()
            .filter(|c| !RESERVED_CLAIM_NAMES.contains(&c.claim_type.as_str()))
            .map(|c| (c.claim_type.clone(), c.claim_value.clone()))
            .collect();

        Claims {
            sub: identity.email.clone(),
            email: identity.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now,
            nbf: now,
            exp: now + self.lifetime_secs as i64,
            roles,
            extra,
        }
    }
}
