use actix_web::web;

pub mod link_handler;
pub mod note_handler;
pub mod quiz_admin_handler;
pub mod quiz_handler;
pub mod report_handler;
pub mod user_handler;
pub mod webhook_handler;

/// Registers every route on the app.
pub fn register_all(cfg: &mut web::ServiceConfig) {
    note_handler::register(cfg);
    link_handler::register(cfg);
    quiz_admin_handler::register(cfg);
    quiz_handler::register(cfg);
    report_handler::register(cfg);
    user_handler::register(cfg);
    webhook_handler::register(cfg);
}
