use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub is_public: bool,
    pub view_count: i64,
    pub is_active: bool,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

impl Link {
    pub fn new(owner_id: &str, title: &str, description: &str, url: &str, is_public: bool) -> Self {
        let now = DateTime::now();
        Link {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            is_public,
            view_count: 0,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }
}
