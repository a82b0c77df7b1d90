//! Course service - Course listings per language and level.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{Course, ProficiencyLevel};

use crate::repository::CourseRepository;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    async fn get_courses_for_language(&self, language_id: &str) -> AppResult<Vec<Course>>;

    /// Get course by ID, `None` when unknown
    async fn get_course(&self, id: &str) -> AppResult<Option<Course>>;

    async fn get_recommended_courses(&self, user_id: &str) -> AppResult<Vec<Course>>;

    /// Courses of one language at exactly `level`
    async fn get_courses_by_level(
        &self,
        language_id: &str,
        level: ProficiencyLevel,
    ) -> AppResult<Vec<Course>>;
}

/// Concrete implementation of CourseService using repository.
pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
}

impl CourseManager {
    /// Create new course service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn get_courses_for_language(&self, language_id: &str) -> AppResult<Vec<Course>> {
        self.repo.get_all_by_language(language_id).await
    }

    async fn get_course(&self, id: &str) -> AppResult<Option<Course>> {
        self.repo.get_by_id(id).await
    }

    async fn get_recommended_courses(&self, user_id: &str) -> AppResult<Vec<Course>> {
        self.repo.get_recommended(user_id).await
    }

    async fn get_courses_by_level(
        &self,
        language_id: &str,
        level: ProficiencyLevel,
    ) -> AppResult<Vec<Course>> {
        let courses = self.repo.get_all_by_language(language_id).await?;
        Ok(courses
            .into_iter()
            .filter(|course| course.level == level)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::repository::MockCourseRepository;

    fn course(id: &str, language_id: &str, level: ProficiencyLevel) -> Course {
        let now = Utc::now();
        Course {
            id: id.to_string(),
            language_id: language_id.to_string(),
            name: format!("Course {}", id),
            description: String::new(),
            level,
            is_curriculum_aligned: false,
            curriculum_grade: None,
            icon_url: None,
            lesson_count: 10,
            estimated_hours: 5,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_courses_by_level_filters_language_courses() {
        let mut repo = MockCourseRepository::new();
        repo.expect_get_all_by_language()
            .with(eq("3"))
            .times(1)
            .returning(|language_id| {
                Ok(vec![
                    course("1", language_id, ProficiencyLevel::Beginner),
                    course("2", language_id, ProficiencyLevel::Advanced),
                    course("3", language_id, ProficiencyLevel::Advanced),
                ])
            });

        let service = CourseManager::new(Arc::new(repo));
        let advanced = service
            .get_courses_by_level("3", ProficiencyLevel::Advanced)
            .await
            .unwrap();

        assert_eq!(advanced.len(), 2);
        assert!(advanced
            .iter()
            .all(|c| c.level == ProficiencyLevel::Advanced && c.language_id == "3"));
    }

    #[tokio::test]
    async fn test_courses_by_level_no_match_is_empty() {
        let mut repo = MockCourseRepository::new();
        repo.expect_get_all_by_language()
            .returning(|language_id| Ok(vec![course("1", language_id, ProficiencyLevel::Beginner)]));

        let service = CourseManager::new(Arc::new(repo));
        let result = service
            .get_courses_by_level("1", ProficiencyLevel::Intermediate)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_recommended_passes_user_through() {
        let mut repo = MockCourseRepository::new();
        repo.expect_get_recommended()
            .with(eq("7"))
            .returning(|_| Ok(vec![course("9", "1", ProficiencyLevel::Beginner)]));

        let service = CourseManager::new(Arc::new(repo));
        let result = service.get_recommended_courses("7").await.unwrap();
        assert_eq!(result[0].id, "9");
    }
}
