use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{RepositoryError, is_unique_violation};
use crate::domain::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Conflict` when a user with the same id already exists.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

struct UserRecord {
    id: Uuid,
    name: String,
    description: String,
    avatar: String,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            description: user.description().to_string(),
            avatar: user.avatar().to_string(),
        }
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let record = UserRecord::from(user);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, description, avatar)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict
            } else {
                anyhow::Error::new(e).context("Failed to insert user").into()
            }
        })?;

        Ok(())
    }
}
