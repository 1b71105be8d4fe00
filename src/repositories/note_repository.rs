use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Note};

/// The four counters a note carries. Own counters track the owner's usage,
/// public counters track other users hitting the public listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteCounter {
    View,
    Download,
    PublicView,
    PublicDownload,
}

impl NoteCounter {
    pub fn field(&self) -> &'static str {
        match self {
            NoteCounter::View => "view_count",
            NoteCounter::Download => "download_count",
            NoteCounter::PublicView => "public_view_count",
            NoteCounter::PublicDownload => "public_download_count",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, note: Note) -> AppResult<Note>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Note>>;
    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Note>>;
    async fn find_public(&self) -> AppResult<Vec<Note>>;
    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Note>>;
    async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> AppResult<bool>;
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
    /// Atomic increment; returns the new value, or None when the note is
    /// missing or inactive.
    async fn increment(&self, id: &str, counter: NoteCounter) -> AppResult<Option<i64>>;
}

pub struct MongoNoteRepository {
    collection: Collection<Note>,
}

impl MongoNoteRepository {
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
impl NoteRepository for MongoNoteRepository {
    async fn create(&self, note: Note) -> AppResult<Note> {
        self.collection.insert_one(&note).await?;
        Ok(note)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Note>> {
        let note = self.collection.find_one(doc! { "id": id }).await?;
        Ok(note)
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Note>> {
        let notes = self
            .collection
            .find(doc! { "owner_id": owner_id, "is_active": true })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(notes)
    }

    async fn find_public(&self) -> AppResult<Vec<Note>> {
        let notes = self
            .collection
            .find(doc! { "is_public": true, "is_active": true })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(notes)
    }

    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Note>> {
        // Range reads deliberately skip the is_active filter; reporting
        // counts deleted documents too.
        let notes = self
            .collection
            .find(doc! {
                "owner_id": owner_id,
                "created_at": { "$gte": from, "$lte": to }
            })
            .await?
            .try_collect()
            .await?;
        Ok(notes)
    }

    async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> AppResult<bool> {
        let mut set = doc! {
            "title": title,
            "content": content,
            "is_public": is_public,
            "modified_at": BsonDateTime::now(),
        };
        if let Some(path) = file_path {
            set.insert("file_path", path);
        }

        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": set })
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

    async fn increment(&self, id: &str, counter: NoteCounter) -> AppResult<Option<i64>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": id, "is_active": true },
                doc! { "$inc": { counter.field(): 1_i64 } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(|note| match counter {
            NoteCounter::View => note.view_count,
            NoteCounter::Download => note.download_count,
            NoteCounter::PublicView => note.public_view_count,
            NoteCounter::PublicDownload => note.public_download_count,
        }))
    }
}
