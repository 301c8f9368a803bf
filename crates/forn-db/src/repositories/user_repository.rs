//! User repository - persistence for the user directory.
//!
//! Stores identity rows plus their role and claim grants. Credential
//! policy (hashing, lockout decisions) lives in forn-directory; this
//! layer only reads and writes rows.

use crate::{DbError, Result as DbErrorResult};

use forn_core::{ErrorLocation, UserAccount, UserClaim};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &UserAccount) -> DbErrorResult<u64> {
        let id = user.id.to_string();
        let lockout_end = user.lockout_end.map(|dt| dt.timestamp());
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, email_confirmed,
                    access_failed_count, lockout_end, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.email_confirmed)
        .bind(user.access_failed_count)
        .bind(lockout_end)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Email lookup is case-insensitive (NOCASE collation on the column).
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserAccount>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, email_confirmed,
                    access_failed_count, lockout_end, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_user).transpose()
    }

    pub async fn roles_of(&self, user_id: Uuid) -> DbErrorResult<Vec<String>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query("SELECT role FROM user_roles WHERE user_id = ? ORDER BY role")
            .bind(user_id_str)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|r| r.try_get::<String, _>("role").map_err(DbError::from))
            .collect()
    }

    pub async fn claims_of(&self, user_id: Uuid) -> DbErrorResult<Vec<UserClaim>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT claim_type, claim_value
                FROM user_claims
                WHERE user_id = ?
                ORDER BY claim_type, claim_value
            "#,
        )
        .bind(user_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> DbErrorResult<UserClaim> {
                Ok(UserClaim {
                    claim_type: r.try_get("claim_type")?,
                    claim_value: r.try_get("claim_value")?,
                })
            })
            .collect()
    }

    pub async fn add_role(&self, user_id: Uuid, role: &str) -> DbErrorResult<u64> {
        let user_id_str = user_id.to_string();

        let result = sqlx::query("INSERT OR IGNORE INTO user_roles (user_id, role) VALUES (?, ?)")
            .bind(user_id_str)
            .bind(role)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn add_claim(&self, user_id: Uuid, claim: &UserClaim) -> DbErrorResult<u64> {
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO user_claims (user_id, claim_type, claim_value)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(user_id_str)
        .bind(&claim.claim_type)
        .bind(&claim.claim_value)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn record_login_failure(
        &self,
        user_id: Uuid,
        access_failed_count: i32,
        lockout_end: Option<DateTime<Utc>>,
    ) -> DbErrorResult<u64> {
        let user_id_str = user_id.to_string();
        let lockout_end_ts = lockout_end.map(|dt| dt.timestamp());

        let result = sqlx::query(
            r#"
                UPDATE users
                SET access_failed_count = ?, lockout_end = ?
                WHERE id = ?
            "#,
        )
        .bind(access_failed_count)
        .bind(lockout_end_ts)
        .bind(user_id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn reset_login_failures(&self, user_id: Uuid) -> DbErrorResult<u64> {
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET access_failed_count = 0, lockout_end = NULL
                WHERE id = ?
            "#,
        )
        .bind(user_id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn decode_user(row: SqliteRow) -> DbErrorResult<UserAccount> {
    let id: String = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let password_hash: String = row.try_get("password_hash")?;
    let email_confirmed: bool = row.try_get("email_confirmed")?;
    let access_failed_count: i32 = row.try_get("access_failed_count")?;
    let lockout_end: Option<i64> = row.try_get("lockout_end")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(UserAccount {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email,
        password_hash,
        email_confirmed,
        access_failed_count,
        lockout_end: lockout_end.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
