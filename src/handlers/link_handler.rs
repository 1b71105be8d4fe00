use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AdminUser,
    errors::AppError,
    models::dto::request::{CreateLinkRequest, OwnerQuery, UpdateLinkRequest},
    models::dto::response::{CounterResponse, LinkResponse, MessageResponse},
    services::LinkService,
};

async fn create_link_in(
    service: &LinkService,
    request: CreateLinkRequest,
) -> Result<HttpResponse, AppError> {
    let link = service.create_link(request).await?;
    Ok(HttpResponse::Created().json(LinkResponse::from(link)))
}

async fn list_links_in(
    service: &LinkService,
    query: OwnerQuery,
) -> Result<HttpResponse, AppError> {
    let links = service.list_by_owner(&query.owner_id).await?;
    let responses: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

async fn list_public_links_in(service: &LinkService) -> Result<HttpResponse, AppError> {
    let links = service.list_public().await?;
    Ok(HttpResponse::Ok().json(links))
}

async fn update_link_in(
    service: &LinkService,
    id: &str,
    request: UpdateLinkRequest,
) -> Result<HttpResponse, AppError> {
    service.update_link(id, request).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Link updated successfully")))
}

async fn delete_link_in(service: &LinkService, id: &str) -> Result<HttpResponse, AppError> {
    service.delete_link(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Link deleted successfully")))
}

async fn record_link_view_in(service: &LinkService, id: &str) -> Result<HttpResponse, AppError> {
    let count = service.record_view(id).await?;
    Ok(HttpResponse::Ok().json(CounterResponse {
        message: "View count updated successfully".to_string(),
        count,
    }))
}

#[post("/api/links")]
async fn create_link(
    state: web::Data<AppState>,
    request: web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    create_link_in(&state.link_service, request.into_inner()).await
}

#[get("/api/links")]
async fn list_links(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> Result<HttpResponse, AppError> {
    list_links_in(&state.link_service, query.into_inner()).await
}

#[get("/api/links/public")]
async fn list_public_links(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_public_links_in(&state.link_service).await
}

#[put("/api/links/{id}")]
async fn update_link(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    update_link_in(&state.link_service, &id, request.into_inner()).await
}

#[delete("/api/links/{id}")]
async fn delete_link(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_link_in(&state.link_service, &id).await
}

#[post("/api/links/{id}/view")]
async fn record_link_view(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    record_link_view_in(&state.link_service, &id).await
}

#[post("/api/admin/links")]
async fn create_admin_link(
    state: web::Data<AppState>,
    _admin: AdminUser,
    request: web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    create_link_in(&state.admin_link_service, request.into_inner()).await
}

#[get("/api/admin/links")]
async fn list_admin_links(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<OwnerQuery>,
) -> Result<HttpResponse, AppError> {
    list_links_in(&state.admin_link_service, query.into_inner()).await
}

#[get("/api/admin/links/public")]
async fn list_public_admin_links(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    list_public_links_in(&state.admin_link_service).await
}

#[put("/api/admin/links/{id}")]
async fn update_admin_link(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
    request: web::Json<UpdateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    update_link_in(&state.admin_link_service, &id, request.into_inner()).await
}

#[delete("/api/admin/links/{id}")]
async fn delete_admin_link(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_link_in(&state.admin_link_service, &id).await
}

#[post("/api/admin/links/{id}/view")]
async fn record_admin_link_view(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    record_link_view_in(&state.admin_link_service, &id).await
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(create_link)
        .service(list_public_links)
        .service(list_links)
        .service(record_link_view)
        .service(update_link)
        .service(delete_link)
        .service(create_admin_link)
        .service(list_public_admin_links)
        .service(list_admin_links)
        .service(record_admin_link_view)
        .service(update_admin_link)
        .service(delete_admin_link);
}
