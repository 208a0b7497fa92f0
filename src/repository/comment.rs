use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{RepositoryError, is_unique_violation};
use crate::domain::{Comment, CommentDraft};

/// Storage for comments. Every call is atomic from the caller's point of view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn save(&self, comment: &Comment) -> Result<(), RepositoryError>;

    /// All comments, oldest first.
    async fn find_all(&self) -> Result<Vec<Comment>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError>;

    /// Replaces the stored comment with the same id. `NotFound` when there is none.
    async fn update(&self, comment: &Comment) -> Result<(), RepositoryError>;

    /// `NotFound` when the comment is already gone.
    async fn delete(&self, comment: &Comment) -> Result<(), RepositoryError>;

    async fn find_by_topic_id(&self, topic_id: Uuid) -> Result<Vec<Comment>, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct CommentRecord {
    id: Uuid,
    user_id: Uuid,
    topic_id: Uuid,
    content: String,
}

impl From<&Comment> for CommentRecord {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id(),
            user_id: comment.user_id(),
            topic_id: comment.topic_id(),
            content: comment.content().to_string(),
        }
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = String;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        CommentDraft::with_id(
            record.id,
            Some(record.user_id),
            Some(record.topic_id),
            Some(record.content),
        )
        .validate()
    }
}

fn into_comments(records: Vec<CommentRecord>) -> Result<Vec<Comment>, RepositoryError> {
    let comments = records
        .into_iter()
        .map(Comment::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)
        .context("Stored comment is not a valid comment")?;

    Ok(comments)
}

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn save(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let record = CommentRecord::from(comment);

        sqlx::query(
            r#"
            INSERT INTO comments (id, user_id, topic_id, content)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(record.topic_id)
        .bind(&record.content)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict
            } else {
                anyhow::Error::new(e)
                    .context("Failed to insert comment")
                    .into()
            }
        })?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Comment>, RepositoryError> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, user_id, topic_id, content
            FROM comments
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load comments")?;

        into_comments(records)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError> {
        let record = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, user_id, topic_id, content
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load comment")?;

        let comment = record
            .map(Comment::try_from)
            .transpose()
            .map_err(anyhow::Error::msg)
            .context("Stored comment is not a valid comment")?;

        Ok(comment)
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn update(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let record = CommentRecord::from(comment);

        let result = sqlx::query(
            r#"
            UPDATE comments
            SET user_id = $2, topic_id = $3, content = $4
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(record.topic_id)
        .bind(&record.content)
        .execute(&self.pool)
        .await
        .context("Failed to update comment")?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    async fn delete(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment.id())
        .execute(&self.pool)
        .await
        .context("Failed to delete comment")?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_topic_id(&self, topic_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, user_id, topic_id, content
            FROM comments
            WHERE topic_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load comments for topic")?;

        into_comments(records)
    }
}
