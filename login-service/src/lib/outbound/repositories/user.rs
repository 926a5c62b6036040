use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::login::errors::DirectoryError;
use crate::domain::login::models::Credential;
use crate::domain::login::ports::UserDirectory;

/// PostgreSQL-backed user directory.
///
/// Queries are bound at runtime so the crate builds without a reachable
/// database.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    password_hash: String,
    active: bool,
    roles: Vec<String>,
}

impl From<CredentialRow> for Credential {
    fn from(row: CredentialRow) -> Self {
        Credential {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            active: row.active,
            roles: row.roles,
        }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DirectoryError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password_hash, active, roles
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

        Ok(row.map(Credential::from))
    }
}
