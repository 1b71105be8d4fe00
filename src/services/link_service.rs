use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Link;
use crate::models::dto::request::{CreateLinkRequest, UpdateLinkRequest};
use crate::models::dto::response::PublicLinkResponse;
use crate::repositories::{LinkRepository, UserRepository};

/// Business logic for a single link collection; instantiated once for
/// `links` and once for `admin_links`.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    users: Arc<dyn UserRepository>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repository, users }
    }

    pub async fn create_link(&self, request: CreateLinkRequest) -> AppResult<Link> {
        request.validate()?;

        let link = Link::new(
            &request.owner_id,
            &request.title,
            &request.description,
            &request.url,
            request.is_public,
        );
        self.repository.create(link).await
    }

    pub async fn get_link(&self, id: &str) -> AppResult<Link> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Link with id {} not found", id)))
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Link>> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Public listing, with owner names joined from the active user set.
    pub async fn list_public(&self) -> AppResult<Vec<PublicLinkResponse>> {
        let links = self.repository.find_public().await?;
        let users = self.users.find_all_active().await?;
        let responses = links
            .into_iter()
            .map(|link| {
                let owner = users.iter().find(|u| u.user_id == link.owner_id);
                PublicLinkResponse::from_link(link, owner)
            })
            .collect();
        Ok(responses)
    }

    pub async fn update_link(&self, id: &str, request: UpdateLinkRequest) -> AppResult<()> {
        request.validate()?;

        let matched = self
            .repository
            .update_link(
                id,
                &request.title,
                &request.description,
                &request.url,
                request.is_public,
            )
            .await?;
        if !matched {
            return Err(AppError::NotFound(format!("Link with id {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_link(&self, id: &str) -> AppResult<()> {
        let matched = self.repository.soft_delete(id).await?;
        if !matched {
            return Err(AppError::NotFound(format!("Link with id {} not found", id)));
        }
        Ok(())
    }

    /// Bumps the view counter, returning the post-increment value.
    pub async fn record_view(&self, id: &str) -> AppResult<i64> {
        self.repository
            .increment_view(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Link not found or inactive".to_string()))
    }
}
