use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{ActivityRangeQuery, DateRangeQuery},
    models::dto::response::{LinkResponse, NoteResponse},
};

#[get("/api/reports/notes")]
async fn notes_in_range(
    state: web::Data<AppState>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let notes = state
        .report_service
        .notes_in_range(&query.owner_id, &query.from, &query.to)
        .await?;
    let responses: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

#[get("/api/reports/links")]
async fn links_in_range(
    state: web::Data<AppState>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let links = state
        .report_service
        .links_in_range(&query.owner_id, &query.from, &query.to)
        .await?;
    let responses: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

#[get("/api/reports/activity")]
async fn activity_report(
    state: web::Data<AppState>,
    query: web::Query<ActivityRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let rows = state
        .report_service
        .activity_report(&query.from, &query.to)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(notes_in_range)
        .service(links_in_range)
        .service(activity_report);
}
