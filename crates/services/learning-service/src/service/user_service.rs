//! User service - Profile, preferences and progress.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{User, UserPreferences, UserProgress};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID, `None` when unknown
    async fn get_user(&self, id: &str) -> AppResult<Option<User>>;

    /// Apply a partial update; `AppError::NotFound` for unknown users
    async fn update_preferences(&self, id: &str, patch: UserPreferences) -> AppResult<User>;

    async fn get_progress(&self, id: &str) -> AppResult<UserProgress>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        self.repo.get_by_id(id).await
    }

    async fn update_preferences(&self, id: &str, patch: UserPreferences) -> AppResult<User> {
        self.repo.update_preferences(id, patch).await
    }

    async fn get_progress(&self, id: &str) -> AppResult<UserProgress> {
        self.repo.get_progress(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::{always, eq};

    use common::AppError;
    use domain::UserRole;

    use crate::repository::MockUserRepository;

    fn create_test_user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: "test@example.com".to_string(),
            phone_number: None,
            full_name: "Test User".to_string(),
            preferred_language: "en".to_string(),
            date_of_birth: None,
            region: None,
            role: UserRole::Student,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq("1"))
            .returning(|id| Ok(Some(create_test_user(id))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user("1").await.unwrap();

        assert_eq!(user.unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_get_user_not_found_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.get_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_preferences_forwards_patch() {
        let patch = UserPreferences {
            full_name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let mut repo = MockUserRepository::new();
        repo.expect_update_preferences()
            .with(eq("1"), eq(patch.clone()))
            .returning(|id, patch| {
                let mut user = create_test_user(id);
                user.apply_preferences(patch);
                Ok(user)
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service.update_preferences("1", patch).await.unwrap();
        assert_eq!(user.full_name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_preferences_not_found_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_preferences()
            .with(always(), always())
            .returning(|_, _| Err(AppError::NotFound));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_preferences("ghost", UserPreferences::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_get_progress_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_progress()
            .returning(|id| Ok(UserProgress::empty(id)));

        let service = UserManager::new(Arc::new(repo));
        let progress = service.get_progress("nobody").await.unwrap();
        assert!(progress.languages.is_empty());
    }
}
