use serde::{Deserialize, Serialize};

use crate::models::domain::UserRole;

/// Claims carried by the identity provider's session token. The role is
/// mirrored from the provider's public metadata; tokens without one are
/// treated as plain users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // provider user id
    #[serde(default)]
    pub role: UserRole,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

#[cfg(test)]
impl SessionClaims {
    pub fn test_claims(sub: &str, role: UserRole) -> Self {
        let now = chrono::Utc::now();
        SessionClaims {
            sub: sub.to_string(),
            role,
            exp: (now + chrono::Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        }
    }

    pub fn expired_claims(sub: &str, role: UserRole) -> Self {
        let now = chrono::Utc::now();
        SessionClaims {
            sub: sub.to_string(),
            role,
            exp: (now - chrono::Duration::hours(2)).timestamp() as usize,
            iat: (now - chrono::Duration::hours(3)).timestamp() as usize,
        }
    }
}
