use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Comment, CommentDraft};

// Every field is optional so a missing one surfaces as a validation message
// instead of a JSON deserialization error.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub user_id: Option<String>,
    pub topic_id: Option<String>,
    pub content: Option<String>,
}

impl CommentPayload {
    /// Builds a draft for an existing comment, keeping the caller's identifier.
    pub fn into_draft_with_id(self, id: Uuid) -> Result<CommentDraft, String> {
        let user_id = parse_optional_id("userId", self.user_id)?;
        let topic_id = parse_optional_id("topicId", self.topic_id)?;
        Ok(CommentDraft::with_id(id, user_id, topic_id, self.content))
    }
}

impl TryFrom<CommentPayload> for CommentDraft {
    type Error = String;

    fn try_from(value: CommentPayload) -> Result<Self, Self::Error> {
        let user_id = parse_optional_id("userId", value.user_id)?;
        let topic_id = parse_optional_id("topicId", value.topic_id)?;
        Ok(CommentDraft::new(user_id, topic_id, value.content))
    }
}

pub fn parse_id(field: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw).map_err(|_| format!("Invalid {field}: must be a valid UUID"))
}

fn parse_optional_id(field: &str, raw: Option<String>) -> Result<Option<Uuid>, String> {
    raw.map(|raw| parse_id(field, &raw)).transpose()
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseBody {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic_id: Uuid,
    pub content: String,
}

impl From<Comment> for CommentResponseBody {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id(),
            user_id: comment.user_id(),
            topic_id: comment.topic_id(),
            content: comment.content().to_string(),
        }
    }
}
