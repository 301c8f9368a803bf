//! Supplier repository - the Resource Store behind the CRUD endpoints.
//!
//! Write operations return the affected-row count rather than `()` so
//! callers can distinguish "nothing changed because the row is gone"
//! from success. The existence-check-then-write pattern in the handlers
//! is not transactional; the count is the authoritative signal.

use crate::{DbError, Result as DbErrorResult};

use forn_core::{ErrorLocation, Supplier};

use std::panic::Location;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Supplier>> {
        // Runtime queries (not the query! macros) so the workspace builds
        // without a live DATABASE_URL.
        let rows = sqlx::query(
            r#"
                SELECT id, name, document, active
                FROM suppliers
                ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_supplier).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Supplier>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, document, active
                FROM suppliers
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_supplier).transpose()
    }

    /// Insert a new record. A duplicate id surfaces as a primary key
    /// constraint error from SQLite, not as an application-level check.
    pub async fn insert(&self, supplier: &Supplier) -> DbErrorResult<u64> {
        let id = supplier.id.to_string();

        let result = sqlx::query(
            r#"
                INSERT INTO suppliers (id, name, document, active)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&supplier.name)
        .bind(&supplier.document)
        .bind(supplier.active)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replace the stored record wholesale. Zero affected rows means the
    /// record disappeared between the caller's existence check and this
    /// write; never inserts.
    pub async fn replace(&self, supplier: &Supplier) -> DbErrorResult<u64> {
        let id = supplier.id.to_string();

        let result = sqlx::query(
            r#"
                UPDATE suppliers
                SET name = ?, document = ?, active = ?
                WHERE id = ?
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.document)
        .bind(supplier.active)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete by id. Zero affected rows means the record was already gone.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?")
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn decode_supplier(row: SqliteRow) -> DbErrorResult<Supplier> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let document: Option<String> = row.try_get("document")?;
    let active: bool = row.try_get("active")?;

    Ok(Supplier {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in suppliers.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name,
        document,
        active,
    })
}
