//! Catalog service - Aggregate views composed from the other services.
//!
//! Independent lookups fan out concurrently through [`crate::container::parallel`].

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use common::AppResult;
use domain::{Course, Language, User, UserProgress};

use super::{CourseService, LanguageService, UserService};
use crate::container::parallel;

/// An active language with its courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LanguageCourses {
    pub language: Language,
    pub courses: Vec<Course>,
}

/// Everything the learner home screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: User,
    pub progress: UserProgress,
    pub total_xp: u64,
    pub best_streak: u32,
    pub recommended_courses: Vec<Course>,
}

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Active languages in storage order, each with its courses
    async fn get_catalog(&self) -> AppResult<Vec<LanguageCourses>>;

    /// `None` when the user is unknown
    async fn get_dashboard(&self, user_id: &str) -> AppResult<Option<Dashboard>>;
}

/// Concrete implementation of CatalogService over the entity services.
pub struct CatalogManager {
    languages: Arc<dyn LanguageService>,
    courses: Arc<dyn CourseService>,
    users: Arc<dyn UserService>,
}

impl CatalogManager {
    pub fn new(
        languages: Arc<dyn LanguageService>,
        courses: Arc<dyn CourseService>,
        users: Arc<dyn UserService>,
    ) -> Self {
        Self {
            languages,
            courses,
            users,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn get_catalog(&self) -> AppResult<Vec<LanguageCourses>> {
        let active: Vec<Language> = self
            .languages
            .get_all_languages()
            .await?
            .into_iter()
            .filter(|language| language.is_active)
            .collect();

        let lookups: Vec<_> = active
            .iter()
            .map(|language| self.courses.get_courses_for_language(&language.id))
            .collect();
        let courses = parallel::join_all(lookups).await?;

        tracing::debug!(languages = active.len(), "Catalog assembled");

        Ok(active
            .into_iter()
            .zip(courses)
            .map(|(language, courses)| LanguageCourses { language, courses })
            .collect())
    }

    async fn get_dashboard(&self, user_id: &str) -> AppResult<Option<Dashboard>> {
        let (user, progress, recommended_courses) = parallel::join3(
            self.users.get_user(user_id),
            self.users.get_progress(user_id),
            self.courses.get_recommended_courses(user_id),
        )
        .await?;

        Ok(user.map(|user| Dashboard {
            user,
            total_xp: progress.total_xp(),
            best_streak: progress.best_streak(),
            progress,
            recommended_courses,
        }))
    }
}
