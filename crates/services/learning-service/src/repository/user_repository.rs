//! User repository and its in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{User, UserPreferences, UserProgress};

use crate::infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Merge `patch` into the stored user and return the result.
    ///
    /// Fails with `AppError::NotFound` when no user has this ID.
    async fn update_preferences(&self, id: &str, patch: UserPreferences) -> AppResult<User>;

    /// Learning progress; an empty record for unknown users
    async fn get_progress(&self, id: &str) -> AppResult<UserProgress>;
}

/// User repository backed by the in-memory store.
pub struct InMemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryUserRepository {
    /// Create new repository instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.store.users.find(id).await;
        if user.is_none() {
            tracing::debug!(id, "User not found");
        }
        Ok(user)
    }

    async fn update_preferences(&self, id: &str, patch: UserPreferences) -> AppResult<User> {
        if patch.is_empty() {
            tracing::debug!(id, "Empty preferences patch, only updatedAt changes");
        }

        match self
            .store
            .users
            .update(id, |user| user.apply_preferences(patch))
            .await
        {
            Some(user) => {
                tracing::info!(id, updated_at = %user.updated_at, "User preferences updated");
                Ok(user)
            }
            None => {
                tracing::warn!(id, "Preferences update for unknown user");
                Err(AppError::NotFound)
            }
        }
    }

    async fn get_progress(&self, id: &str) -> AppResult<UserProgress> {
        Ok(self
            .store
            .progress
            .find(id)
            .await
            .unwrap_or_else(|| UserProgress::empty(id)))
    }
}
