use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{CommentRepository, RepositoryError, UserRepository};
use crate::domain::{Comment, User};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| anyhow::anyhow!("In-memory store lock is poisoned").into())
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| anyhow::anyhow!("In-memory store lock is poisoned").into())
}

/// Process-local comment storage; comments are kept in insertion order.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn save(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut comments = write(&self.comments)?;
        if comments.iter().any(|c| c.id() == comment.id()) {
            return Err(RepositoryError::Conflict);
        }
        comments.push(comment.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Comment>, RepositoryError> {
        Ok(read(&self.comments)?.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError> {
        Ok(read(&self.comments)?.iter().find(|c| c.id() == id).cloned())
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn update(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut comments = write(&self.comments)?;
        let stored = comments
            .iter_mut()
            .find(|c| c.id() == comment.id())
            .ok_or(RepositoryError::NotFound)?;
        *stored = comment.clone();
        Ok(())
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn delete(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut comments = write(&self.comments)?;
        let position = comments
            .iter()
            .position(|c| c.id() == comment.id())
            .ok_or(RepositoryError::NotFound)?;
        comments.remove(position);
        Ok(())
    }

    async fn find_by_topic_id(&self, topic_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        Ok(read(&self.comments)?
            .iter()
            .filter(|c| c.topic_id() == topic_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = write(&self.users)?;
        if users.contains_key(&user.id()) {
            return Err(RepositoryError::Conflict);
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }
}
