use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: i32, // declared total, authoritative for scoring
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

impl Quiz {
    pub fn new(name: &str, description: &str, question_count: i32) -> Self {
        let now = DateTime::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            question_count,
            is_published: false,
            start_date: None,
            end_date: None,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }

    /// Expiry is computed at read time, never stored.
    pub fn is_expired(&self) -> bool {
        match self.end_date {
            Some(end) => DateTime::now() > end,
            None => false,
        }
    }
}
