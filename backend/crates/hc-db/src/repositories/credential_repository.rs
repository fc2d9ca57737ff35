use crate::{DbError, Result as DbErrorResult};

use hc_core::{ErrorLocation, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Durable mapping from normalized identifier to identity record.
///
/// Identifiers are stored lowercase; every lookup lowercases its argument so
/// matching is case-insensitive no matter what the caller passes in.
pub struct CredentialRepository {
    pool: SqlitePool,
}

impl CredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_identifier(&self, identifier: &str) -> DbErrorResult<Option<User>> {
        let normalized = identifier.trim().to_lowercase();

        let row = sqlx::query(
            r#"
            SELECT id, identifier, display_name, secret_hash, secret_salt,
                   role, active, created_at
            FROM hc_users
            WHERE identifier = ?
            "#,
        )
        .bind(&normalized)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    /// True iff a record with that identifier is present, active or not.
    pub async fn exists(&self, identifier: &str) -> DbErrorResult<bool> {
        let normalized = identifier.trim().to_lowercase();

        let row = sqlx::query("SELECT 1 FROM hc_users WHERE identifier = ?")
            .bind(&normalized)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Insert a new record. The UNIQUE constraint on identifier is the only
    /// duplicate check, so concurrent registrations cannot race past it.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id_str = user.id.to_string();
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO hc_users
                (id, identifier, display_name, secret_hash, secret_salt,
                 role, active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&user.identifier)
        .bind(&user.display_name)
        .bind(&user.secret_hash)
        .bind(&user.secret_salt)
        .bind(user.role.as_str())
        .bind(user.active)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::DuplicateIdentifier {
                    identifier: user.identifier.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace hash and salt together; they are only ever rotated as a pair.
    pub async fn update_secret(
        &self,
        id: Uuid,
        secret_hash: &[u8],
        secret_salt: &[u8],
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query(
            "UPDATE hc_users SET secret_hash = ?, secret_salt = ? WHERE id = ?",
        )
        .bind(secret_hash)
        .bind(secret_salt)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_active(&self, id: Uuid, active: bool) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("UPDATE hc_users SET active = ? WHERE id = ?")
            .bind(active)
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: SqliteRow) -> DbErrorResult<User> {
    let id_str: String = row.try_get("id")?;
    let role_str: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: Uuid::parse_str(&id_str).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in hc_users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        identifier: row.try_get("identifier")?,
        display_name: row.try_get("display_name")?,
        secret_hash: row.try_get("secret_hash")?,
        secret_salt: row.try_get("secret_salt")?,
        role: Role::from_str(&role_str).map_err(|e| DbError::Initialization {
            message: format!("Invalid role in hc_users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        active: row.try_get("active")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in hc_users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
