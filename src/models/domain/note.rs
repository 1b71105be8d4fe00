use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub file_path: Option<String>, // public path under /uploads, set when a file was attached
    pub is_public: bool,
    pub view_count: i64,
    pub download_count: i64,
    pub public_view_count: i64,     // views by other users
    pub public_download_count: i64, // downloads by other users
    pub is_active: bool,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

impl Note {
    pub fn new(
        owner_id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> Self {
        let now = DateTime::now();
        Note {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            file_path,
            is_public,
            view_count: 0,
            download_count: 0,
            public_view_count: 0,
            public_download_count: 0,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }
}
