//! Persisted user identity row, owned by the user directory.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored user. The plaintext password never appears here; only the
/// argon2 hash is persisted. Lockout bookkeeping lives on the row so the
/// directory needs no extra state between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    /// Consecutive failed login attempts since the last success
    pub access_failed_count: i32,
    /// Account is locked until this instant when set
    pub lockout_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new account with default lockout state
    pub fn new(email: String, password_hash: String, email_confirmed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            email_confirmed,
            access_failed_count: 0,
            lockout_end: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether a lockout is active at `now`
    pub fn is_locked_out(&self, now: DateTime<Utc>) -> bool {
        self.lockout_end.is_some_and(|end| end > now)
    }
}
