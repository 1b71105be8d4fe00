use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AdminUser,
    errors::AppError,
    models::dto::request::{
        CreateQuestionRequest, CreateQuizRequest, PublishQuizRequest, UpdateQuestionRequest,
        UpdateQuizRequest,
    },
    models::dto::response::{
        MessageResponse, QuestionCountResponse, QuizQuestionResponse, QuizResponse,
    },
};

#[post("/api/admin/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_admin_service
        .create_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(QuizResponse::from(quiz)))
}

#[put("/api/admin/quizzes/{id}")]
async fn update_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_admin_service
        .update_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Quiz updated successfully")))
}

#[put("/api/admin/quizzes/{id}/publish")]
async fn publish_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
    request: web::Json<PublishQuizRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_admin_service
        .publish_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Quiz published successfully")))
}

#[get("/api/admin/quizzes/{id}/publish-state")]
async fn publish_state(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_admin_service.publish_state(&id).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(quiz)))
}

#[delete("/api/admin/quizzes/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_admin_service.delete_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Quiz deleted successfully")))
}

/// Authoring listing; includes the correct option, unlike the taker route.
#[get("/api/admin/quizzes/{id}/questions")]
async fn list_quiz_questions(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_admin_service.list_questions(&id).await?;
    let responses: Vec<QuizQuestionResponse> = questions
        .into_iter()
        .map(QuizQuestionResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(responses))
}

#[get("/api/admin/quizzes/{id}/question-count")]
async fn question_count(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let count = state.quiz_admin_service.question_count(&id).await?;
    Ok(HttpResponse::Ok().json(QuestionCountResponse { count }))
}

#[get("/api/admin/quizzes/{id}/analysis")]
async fn quiz_analysis(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let analysis = state.report_service.quiz_analysis(&id).await?;
    Ok(HttpResponse::Ok().json(analysis))
}

#[post("/api/admin/questions")]
async fn add_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .quiz_admin_service
        .add_question(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(QuizQuestionResponse::from(question)))
}

#[get("/api/admin/questions/{id}")]
async fn get_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.quiz_admin_service.get_question(&id).await?;
    Ok(HttpResponse::Ok().json(QuizQuestionResponse::from(question)))
}

#[put("/api/admin/questions/{id}")]
async fn update_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_admin_service
        .update_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Question updated successfully")))
}

#[delete("/api/admin/questions/{id}")]
async fn delete_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_admin_service.delete_question(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Question deleted successfully")))
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(create_quiz)
        .service(publish_quiz)
        .service(publish_state)
        .service(list_quiz_questions)
        .service(question_count)
        .service(quiz_analysis)
        .service(update_quiz)
        .service(delete_quiz)
        .service(add_question)
        .service(get_question)
        .service(update_question)
        .service(delete_question);
}
