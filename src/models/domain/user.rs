use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    /// Maps the provider's public-metadata role string; anything that is
    /// not exactly "admin" stays a plain user.
    pub fn from_provider(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// Mirror of identity-provider state. Created, updated and deactivated only
/// by the webhook; keyed by the provider's `user_id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime,
}

impl User {
    pub fn new(user_id: &str, email: &str, first_name: &str, last_name: &str, role: UserRole) -> Self {
        User {
            user_id: user_id.to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
            is_active: true,
            created_at: DateTime::now(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(user_id: &str) -> Self {
        User::new(
            user_id,
            &format!("{}@example.com", user_id),
            "Test",
            "User",
            UserRole::User,
        )
    }
}
