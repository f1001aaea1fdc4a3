use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row};
use ticketera_core::{Email, User, UserStore, UserStoreError};
use uuid::Uuid;

use crate::config::constants::STORE_TIMEOUT;

// PgPool is a shared handle, so the store clones cheaply.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let id = user.id();
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.name())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret());

        tokio::time::timeout(STORE_TIMEOUT, query.execute(&self.pool))
            .await
            .map_err(|_| UserStoreError::Timeout)?
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    // The unique index on email is the only constraint here.
                    if db_err.constraint().is_some() {
                        return UserStoreError::UserAlreadyExists;
                    }
                }
                UserStoreError::UnexpectedError(e.to_string())
            })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = tokio::time::timeout(STORE_TIMEOUT, query.fetch_optional(&self.pool))
            .await
            .map_err(|_| UserStoreError::Timeout)?
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        User::parse(
            id,
            name,
            Secret::from(email),
            Secret::from(password_hash),
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}
