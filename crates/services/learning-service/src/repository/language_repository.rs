//! Language repository and its in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::Language;

use crate::infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to languages.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// All languages, active or not, in storage order
    async fn get_all(&self) -> AppResult<Vec<Language>>;

    /// Find language by ID
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Language>>;

    /// Languages whose region equals `region`
    async fn get_by_region(&self, region: &str) -> AppResult<Vec<Language>>;

    /// Case-insensitive substring search over name, description and region
    async fn search(&self, query: &str) -> AppResult<Vec<Language>>;
}

/// Language repository backed by the in-memory store.
pub struct InMemoryLanguageRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryLanguageRepository {
    /// Create new repository instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LanguageRepository for InMemoryLanguageRepository {
    async fn get_all(&self) -> AppResult<Vec<Language>> {
        Ok(self.store.languages.all().await)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Language>> {
        let language = self.store.languages.find(id).await;
        if language.is_none() {
            tracing::debug!(id, "Language not found");
        }
        Ok(language)
    }

    async fn get_by_region(&self, region: &str) -> AppResult<Vec<Language>> {
        Ok(self
            .store
            .languages
            .filter(|language| language.region == region)
            .await)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Language>> {
        let needle = query.to_lowercase();
        let matches = self
            .store
            .languages
            .filter(|language| language.matches_query(&needle))
            .await;

        tracing::debug!(query, matches = matches.len(), "Language search");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryLanguageRepository {
        InMemoryLanguageRepository::new(Arc::new(MemoryStore::seeded().unwrap()))
    }

    #[tokio::test]
    async fn test_get_by_id_returns_swahili() {
        let language = repository().get_by_id("3").await.unwrap().unwrap();
        assert_eq!(language.name, "Swahili");
        assert_eq!(language.speaker_count, 15_000_000);
    }

    #[tokio::test]
    async fn test_get_by_id_misses_with_none() {
        assert!(repository().get_by_id("42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_region_is_exact() {
        let repo = repository();
        let east: Vec<_> = repo
            .get_by_region("East Africa")
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(east, vec!["Swahili", "Amharic"]);

        assert!(repo.get_by_region("east africa").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_ignores_case_and_spans_fields() {
        let repo = repository();

        let by_name = repo.search("SWAHILI").await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_description = repo.search("ge'ez").await.unwrap();
        assert_eq!(by_description[0].name, "Amharic");

        let by_region = repo.search("west").await.unwrap();
        assert_eq!(by_region.len(), 3);

        assert!(repo.search("klingon").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_exact_name_finds_every_language() {
        let repo = repository();
        for language in repo.get_all().await.unwrap() {
            let found = repo.search(&language.name).await.unwrap();
            assert!(found.iter().any(|l| l.id == language.id));
        }
    }
}
