use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    /// Lookup honoring the soft-delete flag.
    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    /// Lookup ignoring the soft-delete flag (publish state, report joins).
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_active(&self) -> AppResult<Vec<Quiz>>;
    async fn update_details(
        &self,
        id: &str,
        name: &str,
        description: &str,
        question_count: i32,
    ) -> AppResult<bool>;
    async fn publish(
        &self,
        id: &str,
        start_date: BsonDateTime,
        end_date: BsonDateTime,
    ) -> AppResult<bool>;
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "id": id, "is_active": true })
            .await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "is_active": true })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn update_details(
        &self,
        id: &str,
        name: &str,
        description: &str,
        question_count: i32,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "name": name,
                    "description": description,
                    "question_count": question_count,
                    "modified_at": BsonDateTime::now(),
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn publish(
        &self,
        id: &str,
        start_date: BsonDateTime,
        end_date: BsonDateTime,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "is_published": true,
                    "start_date": start_date,
                    "end_date": end_date,
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
}
