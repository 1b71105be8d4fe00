use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Link};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn create(&self, link: Link) -> AppResult<Link>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Link>>;
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Link>>;
    async fn find_public(&self) -> AppResult<Vec<Link>>;
    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Link>>;
    async fn update_link(
        &self,
        id: &str,
        title: &str,
        description: &str,
        url: &str,
        is_public: bool,
    ) -> AppResult<bool>;
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
    /// Atomic increment; returns the new value, or None when the link is
    /// missing or inactive.
    async fn increment_view(&self, id: &str) -> AppResult<Option<i64>>;
}

pub struct MongoLinkRepository {
    collection: Collection<Link>,
}

impl MongoLinkRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!(
            "Creating indexes for {} collection",
            self.collection.name()
        );

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let owner_created_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("owner_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(owner_created_index).await?;

        Ok(())
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn create(&self, link: Link) -> AppResult<Link> {
        self.collection.insert_one(&link).await?;
        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Link>> {
        let link = self.collection.find_one(doc! { "id": id }).await?;
        Ok(link)
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Link>> {
        let links = self
            .collection
            .find(doc! { "owner_id": owner_id, "is_active": true })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(links)
    }

    async fn find_public(&self) -> AppResult<Vec<Link>> {
        let links = self
            .collection
            .find(doc! { "is_public": true, "is_active": true })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(links)
    }

    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Link>> {
        let links = self
            .collection
            .find(doc! {
                "owner_id": owner_id,
                "created_at": { "$gte": from, "$lte": to }
            })
            .await?
            .try_collect()
            .await?;
        Ok(links)
    }

    async fn update_link(
        &self,
        id: &str,
        title: &str,
        description: &str,
        url: &str,
        is_public: bool,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "title": title,
                    "description": description,
                    "url": url,
                    "is_public": is_public,
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

    async fn increment_view(&self, id: &str) -> AppResult<Option<i64>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": id, "is_active": true },
                doc! { "$inc": { "view_count": 1_i64 } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(|link| link.view_count))
    }
}
