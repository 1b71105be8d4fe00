use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{User, UserRole},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row; the unique index on `user_id` rejects
    /// duplicate webhook deliveries.
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>>;
    async fn update_profile(
        &self,
        user_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
        is_active: bool,
    ) -> AppResult<bool>;
    async fn deactivate(&self, user_id: &str) -> AppResult<bool>;
    async fn find_all_active(&self) -> AppResult<Vec<User>>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for users collection");

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
        is_active: bool,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "user_id": user_id },
                doc! { "$set": {
                    "email": email,
                    "first_name": first_name,
                    "last_name": last_name,
                    "role": role.as_str(),
                    "is_active": is_active,
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn deactivate(&self, user_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "user_id": user_id },
                doc! { "$set": { "is_active": false } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn find_all_active(&self) -> AppResult<Vec<User>> {
        let users = self
            .collection
            .find(doc! { "is_active": true })
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }
}
