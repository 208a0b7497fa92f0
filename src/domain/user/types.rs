use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct UserPayload {
    pub id: String,
    pub name: String,
    pub description: String,
    pub avatar: String,
}
