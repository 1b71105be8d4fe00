use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Client, ClientSession, Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{QuizResult, UserAnswer},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Persists a graded attempt atomically: prior answers and the prior
    /// result for the same (user, quiz) are removed and the new rows
    /// inserted in one transaction, so a re-attempt overwrites instead of
    /// accumulating and either everything lands or nothing does.
    async fn replace_attempt(
        &self,
        answers: Vec<UserAnswer>,
        result: QuizResult,
    ) -> AppResult<QuizResult>;
    async fn find_result(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<QuizResult>>;
    async fn find_results_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>>;
    /// Analysis view; deliberately ignores the soft-delete flag.
    async fn find_results_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResult>>;
    async fn find_answers(&self, quiz_id: &str, user_id: &str) -> AppResult<Vec<UserAnswer>>;
}

pub struct MongoSubmissionRepository {
    answers: Collection<UserAnswer>,
    results: Collection<QuizResult>,
    client: Client,
}

impl MongoSubmissionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            answers: db.get_collection("user_answers"),
            results: db.get_collection("quiz_results"),
            client: db.client().clone(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_answers and quiz_results collections");

        let answer_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let answer_attempt_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_quiz_question_unique".to_string())
                    .build(),
            )
            .build();

        self.answers.create_index(answer_id_index).await?;
        self.answers.create_index(answer_attempt_index).await?;

        let result_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let result_attempt_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_quiz_unique".to_string())
                    .build(),
            )
            .build();

        self.results.create_index(result_id_index).await?;
        self.results.create_index(result_attempt_index).await?;

        Ok(())
    }

    async fn replace_in_session(
        &self,
        session: &mut ClientSession,
        answers: &[UserAnswer],
        result: &QuizResult,
    ) -> AppResult<()> {
        let attempt_filter = doc! {
            "user_id": &result.user_id,
            "quiz_id": &result.quiz_id,
        };

        self.answers
            .delete_many(attempt_filter.clone())
            .session(&mut *session)
            .await?;
        self.results
            .delete_many(attempt_filter)
            .session(&mut *session)
            .await?;

        if !answers.is_empty() {
            self.answers
                .insert_many(answers)
                .session(&mut *session)
                .await?;
        }
        self.results
            .insert_one(result)
            .session(&mut *session)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn replace_attempt(
        &self,
        answers: Vec<UserAnswer>,
        result: QuizResult,
    ) -> AppResult<QuizResult> {
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        match self.replace_in_session(&mut session, &answers, &result).await {
            Ok(()) => {
                session.commit_transaction().await?;
                Ok(result)
            }
            Err(err) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    log::error!("Failed to abort submission transaction: {}", abort_err);
                }
                Err(AppError::DatabaseError(format!(
                    "Quiz submission failed: {}",
                    err
                )))
            }
        }
    }

    async fn find_result(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<QuizResult>> {
        let result = self
            .results
            .find_one(doc! {
                "quiz_id": quiz_id,
                "user_id": user_id,
                "is_active": true
            })
            .await?;
        Ok(result)
    }

    async fn find_results_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self
            .results
            .find(doc! { "user_id": user_id, "is_active": true })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn find_results_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self
            .results
            .find(doc! { "quiz_id": quiz_id })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn find_answers(&self, quiz_id: &str, user_id: &str) -> AppResult<Vec<UserAnswer>> {
        let answers = self
            .answers
            .find(doc! {
                "quiz_id": quiz_id,
                "user_id": user_id,
                "is_active": true
            })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }
}
