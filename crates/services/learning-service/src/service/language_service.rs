//! Language service - Language queries for catalog and landing pages.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{Language, ProficiencyLevel};

use crate::repository::LanguageRepository;

/// Language service trait for dependency injection.
#[async_trait]
pub trait LanguageService: Send + Sync {
    async fn get_all_languages(&self) -> AppResult<Vec<Language>>;

    /// Get language by ID, `None` when unknown
    async fn get_language(&self, id: &str) -> AppResult<Option<Language>>;

    async fn get_languages_by_region(&self, region: &str) -> AppResult<Vec<Language>>;

    async fn search_languages(&self, query: &str) -> AppResult<Vec<Language>>;

    /// Languages ranked by speaker count, largest first.
    ///
    /// `None` uses the configured default limit.
    async fn get_popular_languages(&self, limit: Option<usize>) -> AppResult<Vec<Language>>;

    async fn get_languages_by_difficulty(
        &self,
        difficulty: ProficiencyLevel,
    ) -> AppResult<Vec<Language>>;
}

/// Concrete implementation of LanguageService using repository.
pub struct LanguageManager {
    repo: Arc<dyn LanguageRepository>,
    default_popular_limit: usize,
}

impl LanguageManager {
    /// Create new language service instance with repository
    pub fn new(repo: Arc<dyn LanguageRepository>, default_popular_limit: usize) -> Self {
        Self {
            repo,
            default_popular_limit,
        }
    }
}

#[async_trait]
impl LanguageService for LanguageManager {
    async fn get_all_languages(&self) -> AppResult<Vec<Language>> {
        self.repo.get_all().await
    }

    async fn get_language(&self, id: &str) -> AppResult<Option<Language>> {
        self.repo.get_by_id(id).await
    }

    async fn get_languages_by_region(&self, region: &str) -> AppResult<Vec<Language>> {
        self.repo.get_by_region(region).await
    }

    async fn search_languages(&self, query: &str) -> AppResult<Vec<Language>> {
        self.repo.search(query).await
    }

    async fn get_popular_languages(&self, limit: Option<usize>) -> AppResult<Vec<Language>> {
        let mut languages = self.repo.get_all().await?;
        // Stable sort keeps storage order among equal counts
        languages.sort_by(|a, b| b.speaker_count.cmp(&a.speaker_count));
        languages.truncate(limit.unwrap_or(self.default_popular_limit));
        Ok(languages)
    }

    async fn get_languages_by_difficulty(
        &self,
        difficulty: ProficiencyLevel,
    ) -> AppResult<Vec<Language>> {
        let languages = self.repo.get_all().await?;
        Ok(languages
            .into_iter()
            .filter(|language| language.difficulty == difficulty)
            .collect())
    }
}
