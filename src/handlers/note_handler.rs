use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AdminUser,
    errors::AppError,
    models::dto::request::{parse_public_flag, NoteForm, OwnerQuery, UpdateNoteForm},
    models::dto::response::{CounterResponse, MessageResponse, NoteResponse},
    repositories::NoteCounter,
    services::NoteService,
    storage::UploadStore,
};

/// Persists the uploaded part, if any, and hands back its public path.
fn store_upload(
    uploads: &UploadStore,
    file: Option<&actix_multipart::form::tempfile::TempFile>,
) -> Result<Option<String>, AppError> {
    match file {
        Some(file) => {
            let path = uploads.save(file.file.path(), file.file_name.as_deref())?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

async fn create_note_in(
    service: &NoteService,
    uploads: &UploadStore,
    form: NoteForm,
) -> Result<HttpResponse, AppError> {
    let file_path = store_upload(uploads, form.file.as_ref())?;
    let note = service
        .create_note(
            &form.owner_id,
            &form.title,
            &form.content,
            parse_public_flag(&form.is_public),
            file_path,
        )
        .await?;
    Ok(HttpResponse::Created().json(NoteResponse::from(note)))
}

async fn list_notes_in(
    service: &NoteService,
    query: OwnerQuery,
) -> Result<HttpResponse, AppError> {
    let notes = service.list_by_owner(&query.owner_id).await?;
    let responses: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

async fn list_public_notes_in(service: &NoteService) -> Result<HttpResponse, AppError> {
    let notes = service.list_public().await?;
    Ok(HttpResponse::Ok().json(notes))
}

async fn update_note_in(
    service: &NoteService,
    uploads: &UploadStore,
    id: &str,
    form: UpdateNoteForm,
) -> Result<HttpResponse, AppError> {
    let file_path = store_upload(uploads, form.file.as_ref())?;
    service
        .update_note(
            id,
            &form.title,
            &form.content,
            parse_public_flag(&form.is_public),
            file_path,
        )
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Note updated successfully")))
}

async fn delete_note_in(service: &NoteService, id: &str) -> Result<HttpResponse, AppError> {
    service.delete_note(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Note deleted successfully")))
}

async fn count_note_event_in(
    service: &NoteService,
    id: &str,
    counter: NoteCounter,
    message: &str,
) -> Result<HttpResponse, AppError> {
    let count = service.record_event(id, counter).await?;
    Ok(HttpResponse::Ok().json(CounterResponse {
        message: message.to_string(),
        count,
    }))
}

#[post("/api/notes")]
async fn create_note(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<NoteForm>,
) -> Result<HttpResponse, AppError> {
    create_note_in(&state.note_service, &state.uploads, form).await
}

#[get("/api/notes")]
async fn list_notes(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> Result<HttpResponse, AppError> {
    list_notes_in(&state.note_service, query.into_inner()).await
}

#[get("/api/notes/public")]
async fn list_public_notes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_public_notes_in(&state.note_service).await
}

#[put("/api/notes/{id}")]
async fn update_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
    MultipartForm(form): MultipartForm<UpdateNoteForm>,
) -> Result<HttpResponse, AppError> {
    update_note_in(&state.note_service, &state.uploads, &id, form).await
}

#[delete("/api/notes/{id}")]
async fn delete_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_note_in(&state.note_service, &id).await
}

#[post("/api/notes/{id}/view")]
async fn record_note_view(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.note_service,
        &id,
        NoteCounter::View,
        "View count updated successfully",
    )
    .await
}

#[post("/api/notes/{id}/download")]
async fn record_note_download(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.note_service,
        &id,
        NoteCounter::Download,
        "Download count updated successfully",
    )
    .await
}

#[post("/api/notes/public/{id}/view")]
async fn record_public_note_view(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.note_service,
        &id,
        NoteCounter::PublicView,
        "View count updated successfully",
    )
    .await
}

#[post("/api/notes/public/{id}/download")]
async fn record_public_note_download(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.note_service,
        &id,
        NoteCounter::PublicDownload,
        "Download count updated successfully",
    )
    .await
}

#[post("/api/admin/notes")]
async fn create_admin_note(
    state: web::Data<AppState>,
    _admin: AdminUser,
    MultipartForm(form): MultipartForm<NoteForm>,
) -> Result<HttpResponse, AppError> {
    create_note_in(&state.admin_note_service, &state.uploads, form).await
}

#[get("/api/admin/notes")]
async fn list_admin_notes(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<OwnerQuery>,
) -> Result<HttpResponse, AppError> {
    list_notes_in(&state.admin_note_service, query.into_inner()).await
}

#[get("/api/admin/notes/public")]
async fn list_public_admin_notes(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    list_public_notes_in(&state.admin_note_service).await
}

#[put("/api/admin/notes/{id}")]
async fn update_admin_note(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
    MultipartForm(form): MultipartForm<UpdateNoteForm>,
) -> Result<HttpResponse, AppError> {
    update_note_in(&state.admin_note_service, &state.uploads, &id, form).await
}

#[delete("/api/admin/notes/{id}")]
async fn delete_admin_note(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_note_in(&state.admin_note_service, &id).await
}

#[post("/api/admin/notes/{id}/view")]
async fn record_admin_note_view(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.admin_note_service,
        &id,
        NoteCounter::View,
        "View count updated successfully",
    )
    .await
}

#[post("/api/admin/notes/{id}/download")]
async fn record_admin_note_download(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    count_note_event_in(
        &state.admin_note_service,
        &id,
        NoteCounter::Download,
        "Download count updated successfully",
    )
    .await
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(create_note)
        .service(list_public_notes)
        .service(list_notes)
        .service(record_public_note_view)
        .service(record_public_note_download)
        .service(record_note_view)
        .service(record_note_download)
        .service(update_note)
        .service(delete_note)
        .service(create_admin_note)
        .service(list_public_admin_notes)
        .service(list_admin_notes)
        .service(record_admin_note_view)
        .service(record_admin_note_download)
        .service(update_admin_note)
        .service(delete_admin_note);
}
