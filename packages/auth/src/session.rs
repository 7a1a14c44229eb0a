// ABOUTME: Session shape and the SQLite-backed store it is merged from
// ABOUTME: Extends base provider claims with id, role, and subscription horizon

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tally_core::Role;

use crate::error::{AuthError, AuthResult};

/// Persisted user record backing the session merge.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub role: Role,
    pub subscribed_till: Option<DateTime<Utc>>,
    pub public_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Base claims the session manager already holds for the signed-in user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionClaims {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// The session shape exposed to the application: base claims extended with
/// the persisted `id`, `role`, and `subscribed_till`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub role: Role,
    pub subscribed_till: Option<DateTime<Utc>>,
}

impl SessionUser {
    /// Merge the persisted record into the base claims.
    pub fn merge(claims: SessionClaims, record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: claims.name,
            email: claims.email,
            image: claims.image,
            role: record.role,
            subscribed_till: record.subscribed_till,
        }
    }
}

/// SQLite-backed store for the persisted user records.
pub struct SessionStore {
    pool: SqlitePool,
}

impl SessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn load_user(&self, user_id: &str) -> AuthResult<UserRecord> {
        debug!("loading user record: {}", user_id);

        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(user_id.to_string()))?;

        Self::row_to_user(&row)
    }

    /// Build the session shape for `user_id` from its persisted record.
    pub async fn session_for(
        &self,
        user_id: &str,
        claims: SessionClaims,
    ) -> AuthResult<SessionUser> {
        let record = self.load_user(user_id).await?;
        Ok(SessionUser::merge(claims, &record))
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AuthResult<UserRecord> {
        let role: String = row.try_get("role")?;
        let role = match role.as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            other => {
                return Err(AuthError::Storage(format!("unknown role: {}", other)));
            }
        };

        Ok(UserRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            image: row.try_get("image")?,
            role,
            subscribed_till: row.try_get("subscribed_till")?,
            public_anonymous: row.try_get("public_anonymous")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
