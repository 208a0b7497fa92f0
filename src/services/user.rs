use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::repository::{RepositoryError, UserRepository};
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    ValidationError(String),

    #[error("user already exists")]
    AlreadyExists,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<RepositoryError> for UserError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict => UserError::AlreadyExists,
            RepositoryError::NotFound => {
                UserError::UnexpectedError(anyhow::anyhow!("User store reported a missing record"))
            }
            RepositoryError::Unexpected(e) => UserError::UnexpectedError(e),
        }
    }
}

/// Registers a user with caller-supplied details.
#[derive(Clone)]
pub struct CreateUser {
    repository: Arc<dyn UserRepository>,
}

impl CreateUser {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, description, avatar))]
    pub async fn run(
        &self,
        id: Uuid,
        name: String,
        description: String,
        avatar: String,
    ) -> Result<User, UserError> {
        let user = User::new(id, name, description, avatar);
        self.repository.save(&user).await?;
        Ok(user)
    }
}
