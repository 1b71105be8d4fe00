use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::QuizQuestion};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion>;
    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>>;
    async fn find_active_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
    async fn count_active_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
    async fn update_question(
        &self,
        id: &str,
        text: &str,
        options: Vec<String>,
        correct_option: i32,
    ) -> AppResult<bool>;
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
    /// Cascade used when the parent quiz is deleted; flips every question
    /// of the quiz regardless of its current state.
    async fn soft_delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<QuizQuestion>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_id_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(quiz_id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let question = self
            .collection
            .find_one(doc! { "id": id, "is_active": true })
            .await?;
        Ok(question)
    }

    async fn find_active_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self
            .collection
            .find(doc! { "quiz_id": quiz_id, "is_active": true })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn count_active_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "quiz_id": quiz_id, "is_active": true })
            .await?;
        Ok(count)
    }

    async fn update_question(
        &self,
        id: &str,
        text: &str,
        options: Vec<String>,
        correct_option: i32,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "text": text,
                    "options": options,
                    "correct_option": correct_option,
                    "modified_at": BsonDateTime::now(),
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": { "is_active": false } })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn soft_delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "quiz_id": quiz_id },
                doc! { "$set": { "is_active": false } },
            )
            .await?;
        Ok(result.modified_count)
    }
}
