use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::SubmitQuizRequest,
    models::dto::response::{
        QuizResponse, QuizResultResponse, SubmitQuizResponse, TakerQuestionResponse,
    },
};

#[get("/api/quizzes")]
async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_taking_service.list_quizzes().await?;
    let responses: Vec<QuizResponse> = quizzes.into_iter().map(QuizResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_taking_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(quiz)))
}

/// Questions as shown to a taker; never carries the correct option.
#[get("/api/quizzes/{id}/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_taking_service.get_questions(&id).await?;
    let responses: Vec<TakerQuestionResponse> = questions
        .into_iter()
        .map(TakerQuestionResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(responses))
}

#[post("/api/quizzes/{id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .quiz_taking_service
        .submit(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SubmitQuizResponse::from(&result)))
}

#[get("/api/quizzes/{id}/result/{user_id}")]
async fn get_result(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, user_id) = path.into_inner();
    let result = state
        .quiz_taking_service
        .get_result(&quiz_id, &user_id)
        .await?;
    Ok(HttpResponse::Ok().json(QuizResultResponse::from(result)))
}

#[get("/api/quizzes/{id}/review/{user_id}")]
async fn get_review(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, user_id) = path.into_inner();
    let review = state
        .quiz_taking_service
        .get_review(&quiz_id, &user_id)
        .await?;
    Ok(HttpResponse::Ok().json(review))
}

#[get("/api/users/{user_id}/solved-quizzes")]
async fn solved_quizzes(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let solved = state.quiz_taking_service.solved_quizzes(&user_id).await?;
    Ok(HttpResponse::Ok().json(solved))
}

#[get("/api/users/{user_id}/quiz-report")]
async fn quiz_report(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let report = state
        .quiz_taking_service
        .solved_quiz_report(&user_id)
        .await?;
    Ok(HttpResponse::Ok().json(report))
}

#[get("/api/users/{user_id}/quiz-results")]
async fn quiz_results(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let results = state.quiz_taking_service.results_summary(&user_id).await?;
    Ok(HttpResponse::Ok().json(results))
}

pub fn register(cfg: &mut web::ServiceConfig) {
    cfg.service(list_quizzes)
        .service(list_questions)
        .service(submit_quiz)
        .service(get_result)
        .service(get_review)
        .service(get_quiz)
        .service(solved_quizzes)
        .service(quiz_report)
        .service(quiz_results);
}
