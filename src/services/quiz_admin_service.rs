use std::sync::Arc;

use mongodb::bson::DateTime as BsonDateTime;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizQuestion};
use crate::models::dto::request::{
    CreateQuestionRequest, CreateQuizRequest, PublishQuizRequest, UpdateQuestionRequest,
    UpdateQuizRequest,
};
use crate::repositories::{QuestionRepository, QuizRepository};

/// Admin-side quiz and question management.
pub struct QuizAdminService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizAdminService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { quizzes, questions }
    }

    /// Creates a quiz in the unpublished state.
    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let quiz = Quiz::new(&request.name, &request.description, request.question_count);
        self.quizzes.create(quiz).await
    }

    pub async fn update_quiz(&self, id: &str, request: UpdateQuizRequest) -> AppResult<()> {
        request.validate()?;

        let matched = self
            .quizzes
            .update_details(id, &request.name, &request.description, request.question_count)
            .await?;
        if !matched {
            return Err(AppError::NotFound(format!("Quiz with id {} not found", id)));
        }
        Ok(())
    }

    /// Publishes a quiz: the window opens now and closes at `end_date`.
    /// Expiry is never written back; reads compare against the clock.
    pub async fn publish_quiz(&self, id: &str, request: PublishQuizRequest) -> AppResult<()> {
        if request.end_date <= chrono::Utc::now() {
            return Err(AppError::ValidationError(
                "End date must be in the future".to_string(),
            ));
        }
        let start = BsonDateTime::now();
        let end = BsonDateTime::from_chrono(request.end_date);
        let matched = self.quizzes.publish(id, start, end).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Quiz with id {} not found", id)));
        }
        Ok(())
    }

    /// Publication state for the authoring screen. Looks past the active
    /// filter so a deactivated quiz still reports its window.
    pub async fn publish_state(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id {} not found", id)))
    }

    /// Soft-deletes a quiz and cascades to its questions.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        let matched = self.quizzes.soft_delete(id).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Quiz with id {} not found", id)));
        }
        let cascaded = self.questions.soft_delete_by_quiz(id).await?;
        log::info!("Soft-deleted quiz {} and {} questions", id, cascaded);
        Ok(())
    }

    pub async fn add_question(&self, request: CreateQuestionRequest) -> AppResult<QuizQuestion> {
        request.validate()?;
        validate_options(&request.options)?;
        let question = QuizQuestion::new(
            &request.quiz_id,
            &request.text,
            request.options,
            request.correct_option,
        );
        self.questions.create(question).await
    }

    pub async fn get_question(&self, id: &str) -> AppResult<QuizQuestion> {
        self.questions
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id {} not found", id)))
    }

    /// Full question listing for quiz management. Unlike the taker-facing
    /// listing this treats an empty quiz as an error.
    pub async fn list_questions(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.find_active_by_quiz(quiz_id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(
                "No questions found for this quiz".to_string(),
            ));
        }
        Ok(questions)
    }

    pub async fn question_count(&self, quiz_id: &str) -> AppResult<u64> {
        self.questions.count_active_by_quiz(quiz_id).await
    }

    pub async fn update_question(&self, id: &str, request: UpdateQuestionRequest) -> AppResult<()> {
        request.validate()?;
        validate_options(&request.options)?;
        let matched = self
            .questions
            .update_question(id, &request.text, request.options, request.correct_option)
            .await?;
        if !matched {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        let matched = self.questions.soft_delete(id).await?;
        if !matched {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                id
            )));
        }
        Ok(())
    }
}

fn validate_options(options: &[String]) -> AppResult<()> {
    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(AppError::ValidationError(
            "All fields are required".to_string(),
        ));
    }
    Ok(())
}
