use std::sync::Arc;

use tracing::field;
use uuid::Uuid;

use crate::domain::{Comment, CommentDraft, CommentPayload};
use crate::repository::{CommentRepository, RepositoryError};
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum CommentError {
    #[error("{0}")]
    ValidationError(String),

    #[error("comment not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CommentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<RepositoryError> for CommentError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => CommentError::NotFound,
            RepositoryError::Conflict => CommentError::UnexpectedError(anyhow::anyhow!(
                "A comment with the same id is already stored"
            )),
            RepositoryError::Unexpected(e) => CommentError::UnexpectedError(e),
        }
    }
}

/// Comment use cases: every operation is one sanitize/validate step at most,
/// followed by explicit repository calls.
#[derive(Clone)]
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, payload), fields(comment_id = field::Empty))]
    pub async fn create_comment(&self, payload: CommentPayload) -> Result<Comment, CommentError> {
        let draft = CommentDraft::try_from(payload).map_err(CommentError::ValidationError)?;
        tracing::Span::current().record("comment_id", field::display(draft.id()));

        let comment = draft
            .sanitize()
            .validate()
            .map_err(CommentError::ValidationError)?;

        self.repository.save(&comment).await?;
        Ok(comment)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_comments(&self) -> Result<Vec<Comment>, CommentError> {
        Ok(self.repository.find_all().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_comments_for_topic(&self, topic_id: Uuid) -> Result<Vec<Comment>, CommentError> {
        Ok(self.repository.find_by_topic_id(topic_id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_comment_by_id(&self, id: Uuid) -> Result<Comment, CommentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound)
    }

    /// Full replacement: the stored comment takes every field from `payload`.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_comment(
        &self,
        id: Uuid,
        payload: CommentPayload,
    ) -> Result<Comment, CommentError> {
        let comment = payload
            .into_draft_with_id(id)
            .and_then(|draft| draft.sanitize().validate())
            .map_err(CommentError::ValidationError)?;

        self.repository.update(&comment).await?;
        Ok(comment)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_comment(&self, id: Uuid) -> Result<(), CommentError> {
        let comment = self.get_comment_by_id(id).await?;
        self.repository.delete(&comment).await?;
        Ok(())
    }
}
