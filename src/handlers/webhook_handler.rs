use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::WebhookEvent,
    models::dto::response::MessageResponse,
};

/// Identity-provider callback. Signature verification happens upstream;
/// this endpoint trusts the payload and always acknowledges events it
/// chose to ignore.
#[post("/webhooks/identity")]
async fn identity_webhook(
    state: web::Data<AppState>,
    event: web::Json<WebhookEvent>,
) -> Result<HttpResponse, AppError> {
    state.identity_service.handle_event(event.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Webhook handled")))
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(identity_webhook);
}
