use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{claims::SessionClaims, token::SessionVerifier, utils::require_admin},
    errors::AppError,
};

/// Extractor guarding admin routes: verifies the provider session token from
/// the Authorization header and requires the admin role. Handlers that take
/// an `AdminUser` argument reject everyone else with 401.
pub struct AdminUser(pub SessionClaims);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_admin(req))
    }
}

fn extract_admin(req: &HttpRequest) -> Result<AdminUser, AppError> {
    let verifier = req
        .app_data::<web::Data<SessionVerifier>>()
        .ok_or_else(|| AppError::InternalError("Session verifier not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    let claims = verifier.verify(token)?;
    require_admin(&claims)?;

    Ok(AdminUser(claims))
}
