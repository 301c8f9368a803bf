//! User directory - registration and credential verification.
//!
//! Owns the password hashing and lockout decisions. Handlers talk to this
//! type; only hashes ever reach the repository layer, and plaintext
//! passwords are never stored or logged.

use crate::{
    DirectoryError, DirectoryIssue, LockoutPolicy, PasswordPolicy, Result as DirectoryResult,
};

use forn_core::{ErrorLocation, UserAccount, UserClaim, UserIdentity};
use forn_db::UserRepository;

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserDirectory {
    users: UserRepository,
    password_policy: PasswordPolicy,
    lockout_policy: LockoutPolicy,
}

impl UserDirectory {
    pub fn new(pool: SqlitePool, lockout_policy: LockoutPolicy) -> Self {
        Self {
            users: UserRepository::new(pool),
            password_policy: PasswordPolicy::default(),
            lockout_policy,
        }
    }

    /// Register a new user. Emails are auto-confirmed; there is no
    /// confirmation flow. All policy violations are collected into a
    /// single rejection rather than reported one at a time.
    pub async fn register(&self, email: &str, password: &str) -> DirectoryResult<UserIdentity> {
        let mut issues = Vec::new();

        if !is_valid_email(email) {
            issues.push(DirectoryIssue::invalid_email());
        }
        issues.extend(self.password_policy.check(password));

        if !issues.is_empty() {
            return Err(DirectoryError::rejected(issues));
        }

        let password_hash = hash_password(password)?;
        let account = UserAccount::new(email.to_string(), password_hash, true);

        match self.users.create(&account).await {
            Ok(_) => self.identity_of(&account).await,
            Err(e) if e.is_unique_violation() => Err(DirectoryError::rejected_with(
                DirectoryIssue::duplicate_email(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials, applying the lockout policy on failure.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`
    /// so responses do not reveal which emails are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> DirectoryResult<UserIdentity> {
        let Some(account) = self.users.find_by_email(email).await? else {
            return Err(DirectoryError::rejected_with(
                DirectoryIssue::invalid_credentials(),
            ));
        };

        let now = Utc::now();
        if account.is_locked_out(now) {
            return Err(DirectoryError::rejected_with(DirectoryIssue::locked_out()));
        }

        if verify_password(password, &account.password_hash)? {
            if account.access_failed_count > 0 || account.lockout_end.is_some() {
                self.users.reset_login_failures(account.id).await?;
            }
            return self.identity_of(&account).await;
        }

        let failed_count = account.access_failed_count + 1;
        if failed_count >= self.lockout_policy.max_failures {
            // Threshold reached: engage the lockout and restart the counter
            let lockout_end = now + self.lockout_policy.lockout_duration();
            self.users
                .record_login_failure(account.id, 0, Some(lockout_end))
                .await?;
            return Err(DirectoryError::rejected_with(DirectoryIssue::locked_out()));
        }

        self.users
            .record_login_failure(account.id, failed_count, None)
            .await?;
        Err(DirectoryError::rejected_with(
            DirectoryIssue::invalid_credentials(),
        ))
    }

    pub async fn grant_role(&self, user_id: Uuid, role: &str) -> DirectoryResult<()> {
        self.users.add_role(user_id, role).await?;
        Ok(())
    }

    pub async fn grant_claim(&self, user_id: Uuid, claim: &UserClaim) -> DirectoryResult<()> {
        self.users.add_claim(user_id, claim).await?;
        Ok(())
    }

    async fn identity_of(&self, account: &UserAccount) -> DirectoryResult<UserIdentity> {
        let roles = self.users.roles_of(account.id).await?;
        let claims = self.users.claims_of(account.id).await?;

        Ok(UserIdentity {
            id: account.id,
            email: account.email.clone(),
            email_confirmed: account.email_confirmed,
            roles,
            claims,
        })
    }
}

/// Minimal shape check: one '@' with non-empty local and domain parts
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        _ => false,
    }
}

#[track_caller]
fn hash_password(password: &str) -> DirectoryResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DirectoryError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

#[track_caller]
fn verify_password(password: &str, stored_hash: &str) -> DirectoryResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| DirectoryError::Hash {
        message: format!("Stored hash is malformed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
