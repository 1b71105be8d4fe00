use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::{User, UserRole};
use crate::models::dto::request::WebhookEvent;
use crate::repositories::UserRepository;

/// Applies identity-provider lifecycle events to the local user mirror.
///
/// The webhook contract is acknowledge-always: unknown event types and
/// events for unknown users are logged and dropped, and a duplicate
/// delivery of `user.created` (rejected by the unique index) is treated
/// the same way. Only an actual database failure on the update paths
/// surfaces as an error.
pub struct IdentityService {
    users: Arc<dyn UserRepository>,
}

impl IdentityService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle_event(&self, event: WebhookEvent) -> AppResult<()> {
        match event.event_type.as_str() {
            "user.created" => self.on_created(event).await,
            "user.updated" => self.on_updated(event).await,
            "user.deleted" => self.on_deleted(event).await,
            other => {
                log::debug!("Ignoring webhook event type {}", other);
                Ok(())
            }
        }
    }

    async fn on_created(&self, event: WebhookEvent) -> AppResult<()> {
        let data = event.data;
        let role = UserRole::from_provider(data.public_metadata.role.as_deref());
        let user = User::new(
            &data.id,
            data.primary_email(),
            data.first_name.as_deref().unwrap_or_default(),
            data.last_name.as_deref().unwrap_or_default(),
            role,
        );

        match self.users.create(user).await {
            Ok(user) => log::info!("User {} created with role {}", user.user_id, user.role.as_str()),
            Err(err) => log::warn!(
                "Dropping user.created for {} (already mirrored?): {}",
                data.id,
                err
            ),
        }
        Ok(())
    }

    async fn on_updated(&self, event: WebhookEvent) -> AppResult<()> {
        let data = event.data;
        let role = UserRole::from_provider(data.public_metadata.role.as_deref());
        let matched = self
            .users
            .update_profile(
                &data.id,
                data.primary_email(),
                data.first_name.as_deref().unwrap_or_default(),
                data.last_name.as_deref().unwrap_or_default(),
                role,
                !data.banned,
            )
            .await?;

        if matched {
            log::info!("User {} updated", data.id);
        } else {
            log::warn!("Ignoring user.updated for unknown user {}", data.id);
        }
        Ok(())
    }

    async fn on_deleted(&self, event: WebhookEvent) -> AppResult<()> {
        let user_id = event.data.id;
        let matched = self.users.deactivate(&user_id).await?;
        if matched {
            log::info!("User {} deactivated", user_id);
        } else {
            log::warn!("Ignoring user.deleted for unknown user {}", user_id);
        }
        Ok(())
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all_active().await
    }
}
