use uuid::Uuid;

use crate::domain::strip_html_tags;

/// A comment as received from a caller, before any checks have run.
///
/// Construction never fails; `validate` is what turns a draft into a
/// [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    id: Uuid,
    user_id: Option<Uuid>,
    topic_id: Option<Uuid>,
    content: Option<String>,
}

impl CommentDraft {
    /// Starts a brand new comment with a freshly generated identifier.
    pub fn new(user_id: Option<Uuid>, topic_id: Option<Uuid>, content: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), user_id, topic_id, content)
    }

    /// Rebuilds a comment around an identifier that already exists.
    pub fn with_id(
        id: Uuid,
        user_id: Option<Uuid>,
        topic_id: Option<Uuid>,
        content: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            topic_id,
            content,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Removes every `<...>` tag from the content.
    pub fn sanitize(mut self) -> Self {
        self.content = self.content.map(|content| strip_html_tags(&content));
        self
    }

    pub fn validate(self) -> Result<Comment, String> {
        let user_id = self
            .user_id
            .ok_or_else(|| "Invalid comment: userId is required.".to_string())?;
        let topic_id = self
            .topic_id
            .ok_or_else(|| "Invalid comment: topicId is required.".to_string())?;
        let content = self
            .content
            .ok_or_else(|| "Invalid comment: content is required.".to_string())?;

        if content.trim().is_empty() {
            return Err("Invalid comment: content cannot be empty.".to_string());
        }

        Ok(Comment {
            id: self.id,
            user_id,
            topic_id,
            content,
        })
    }
}

/// A comment whose author, topic and content are all known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: Uuid,
    user_id: Uuid,
    topic_id: Uuid,
    content: String,
}

impl Comment {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
