use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::Deserialize;
use validator::Validate;

/// Multipart body for creating a note. The file part is optional.
#[derive(Debug, MultipartForm)]
pub struct NoteForm {
    pub owner_id: Text<String>,
    pub title: Text<String>,
    pub content: Text<String>,
    pub is_public: Text<String>,
    pub file: Option<TempFile>,
}

/// Multipart body for updating a note; the id comes from the path.
#[derive(Debug, MultipartForm)]
pub struct UpdateNoteForm {
    pub title: Text<String>,
    pub content: Text<String>,
    pub is_public: Text<String>,
    pub file: Option<TempFile>,
}

/// Flag fields arrive as form text; the UI sends "1"/"true".
pub fn parse_public_flag(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed == "1" || trimmed.eq_ignore_ascii_case("true")
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub owner_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    pub is_public: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    pub is_public: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(range(min = 1))]
    pub question_count: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(range(min = 1))]
    pub question_count: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishQuizRequest {
    pub end_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub quiz_id: String,

    #[validate(length(min = 1, max = 2000))]
    pub text: String,

    #[validate(length(equal = 4, message = "Exactly four options are required"))]
    pub options: Vec<String>,

    #[validate(range(min = 1, max = 4))]
    pub correct_option: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,

    #[validate(length(equal = 4, message = "Exactly four options are required"))]
    pub options: Vec<String>,

    #[validate(range(min = 1, max = 4))]
    pub correct_option: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub question_id: String,
    pub selected_option: i32, // 1-based
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub user_id: String,

    pub answers: Vec<AnswerInput>,
}

/// Identity-provider user lifecycle envelope, as delivered to the webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookUser {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<WebhookEmail>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub public_metadata: WebhookMetadata,
    #[serde(default)]
    pub banned: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEmail {
    pub email_address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl WebhookUser {
    pub fn primary_email(&self) -> &str {
        self.email_addresses
            .first()
            .map(|e| e.email_address.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerQuery {
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeQuery {
    pub owner_id: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRangeQuery {
    pub from: String,
    pub to: String,
}
