//! Verified identity view handed to the token issuer.

use crate::UserClaim;

use uuid::Uuid;

/// A verified identity. Constructed only by the user directory after a
/// successful registration or credential check; the token issuer trusts
/// it and does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: Uuid,
    pub email: String,
    pub email_confirmed: bool,
    /// Sorted, deduplicated
    pub roles: Vec<String>,
    /// Sorted, deduplicated
    pub claims: Vec<UserClaim>,
}
