use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Note;
use crate::models::dto::response::PublicNoteResponse;
use crate::repositories::{NoteCounter, NoteRepository, UserRepository};

/// Business logic for a single note collection.
///
/// Two instances exist at runtime, one over `notes` and one over
/// `admin_notes`; they differ only in the repository handed in here.
pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
    users: Arc<dyn UserRepository>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repository, users }
    }

    /// Creates a note. `file_path` is the already-stored upload path, if any.
    pub async fn create_note(
        &self,
        owner_id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> AppResult<Note> {
        validate_note_fields(owner_id, title, content)?;
        let note = Note::new(owner_id, title, content, is_public, file_path);
        self.repository.create(note).await
    }

    pub async fn get_note(&self, id: &str) -> AppResult<Note> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Note with id {} not found", id)))
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Note>> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Public listing, with owner names joined from the active user set.
    pub async fn list_public(&self) -> AppResult<Vec<PublicNoteResponse>> {
        let notes = self.repository.find_public().await?;
        let users = self.users.find_all_active().await?;
        let responses = notes
            .into_iter()
            .map(|note| {
                let owner = users.iter().find(|u| u.user_id == note.owner_id);
                PublicNoteResponse::from_note(note, owner)
            })
            .collect();
        Ok(responses)
    }

    /// Overwrites the editable fields. The stored file path is only touched
    /// when a replacement file was uploaded.
    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> AppResult<()> {
        let matched = self
            .repository
            .update_note(id, title, content, is_public, file_path)
            .await?;
        if !matched {
            return Err(AppError::NotFound(format!("Note with id {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_note(&self, id: &str) -> AppResult<()> {
        let matched = self.repository.soft_delete(id).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Note with id {} not found", id)));
        }
        Ok(())
    }

    /// Bumps one of the note counters, returning the post-increment value.
    pub async fn record_event(&self, id: &str, counter: NoteCounter) -> AppResult<i64> {
        self.repository
            .increment(id, counter)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found or inactive".to_string()))
    }
}

fn validate_note_fields(owner_id: &str, title: &str, content: &str) -> AppResult<()> {
    if owner_id.trim().is_empty() || title.trim().is_empty() || content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "All fields are required".to_string(),
        ));
    }
    Ok(())
}
