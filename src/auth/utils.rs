use crate::{
    auth::claims::SessionClaims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

pub fn require_admin(claims: &SessionClaims) -> AppResult<()> {
    if claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}
