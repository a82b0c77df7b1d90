//! Course repository and its in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::Course;

use crate::infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to courses.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses in storage order
    async fn get_all(&self) -> AppResult<Vec<Course>>;

    /// Courses teaching the given language
    async fn get_all_by_language(&self, language_id: &str) -> AppResult<Vec<Course>>;

    /// Find course by ID
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Course>>;

    /// Courses suggested to a user
    async fn get_recommended(&self, user_id: &str) -> AppResult<Vec<Course>>;
}

/// Course repository backed by the in-memory store.
///
/// Recommendations are the first `recommended_limit` courses regardless of
/// the user.
pub struct InMemoryCourseRepository {
    store: Arc<MemoryStore>,
    recommended_limit: usize,
}

impl InMemoryCourseRepository {
    /// Create new repository instance
    pub fn new(store: Arc<MemoryStore>, recommended_limit: usize) -> Self {
        Self {
            store,
            recommended_limit,
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn get_all(&self) -> AppResult<Vec<Course>> {
        Ok(self.store.courses.all().await)
    }

    async fn get_all_by_language(&self, language_id: &str) -> AppResult<Vec<Course>> {
        Ok(self
            .store
            .courses
            .filter(|course| course.language_id == language_id)
            .await)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.store.courses.find(id).await;
        if course.is_none() {
            tracing::debug!(id, "Course not found");
        }
        Ok(course)
    }

    async fn get_recommended(&self, user_id: &str) -> AppResult<Vec<Course>> {
        tracing::debug!(user_id, limit = self.recommended_limit, "Recommending courses");
        Ok(self.store.courses.take(self.recommended_limit).await)
    }
}
