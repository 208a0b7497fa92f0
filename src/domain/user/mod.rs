mod types;

pub use types::*;
use uuid::Uuid;

/// A forum member. Stored exactly as supplied when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: String,
    description: String,
    avatar: String,
}

impl User {
    pub fn new(id: Uuid, name: String, description: String, avatar: String) -> Self {
        Self {
            id,
            name,
            description,
            avatar,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}
