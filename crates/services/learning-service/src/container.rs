//! Service Container - Centralized service access with parallel execution support.
//!
//! The container is the only place where repositories and services are
//! constructed and wired. Consumers ask it for services and never build
//! their own.
//!
//! Features:
//! - Centralized access to all application services
//! - Thread-safe concurrent access via Arc
//! - A lazily built process-wide instance ([`shared`])
//! - Parallel execution utilities for independent operations

use std::future::Future;
use std::sync::Arc;

use once_cell::sync::Lazy;

use common::{AppError, AppResult};

use crate::config::LearningServiceConfig;
use crate::infra::MemoryStore;
use crate::repository::{
    InMemoryCourseRepository, InMemoryLanguageRepository, InMemoryUserRepository,
};
use crate::service::{
    CatalogManager, CatalogService, CourseManager, CourseService, LanguageManager,
    LanguageService, UserManager, UserService,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get language service
    fn languages(&self) -> Arc<dyn LanguageService>;

    /// Get course service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    language_service: Arc<dyn LanguageService>,
    course_service: Arc<dyn CourseService>,
    user_service: Arc<dyn UserService>,
    catalog_service: Arc<dyn CatalogService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        language_service: Arc<dyn LanguageService>,
        course_service: Arc<dyn CourseService>,
        user_service: Arc<dyn UserService>,
        catalog_service: Arc<dyn CatalogService>,
    ) -> Self {
        Self {
            language_service,
            course_service,
            user_service,
            catalog_service,
        }
    }

    /// Wire in-memory repositories over `store` into the services
    pub fn from_store(store: Arc<MemoryStore>, config: &LearningServiceConfig) -> Self {
        let language_repo = Arc::new(InMemoryLanguageRepository::new(store.clone()));
        let course_repo = Arc::new(InMemoryCourseRepository::new(
            store.clone(),
            config.recommended_limit,
        ));
        let user_repo = Arc::new(InMemoryUserRepository::new(store));

        let language_service: Arc<dyn LanguageService> =
            Arc::new(LanguageManager::new(language_repo, config.popular_limit));
        let course_service: Arc<dyn CourseService> = Arc::new(CourseManager::new(course_repo));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(user_repo));
        let catalog_service = Arc::new(CatalogManager::new(
            language_service.clone(),
            course_service.clone(),
            user_service.clone(),
        ));

        Self {
            language_service,
            course_service,
            user_service,
            catalog_service,
        }
    }

    /// Create a container over a freshly seeded store
    pub fn in_memory(config: &LearningServiceConfig) -> AppResult<Self> {
        let store = Arc::new(MemoryStore::seeded()?);
        Ok(Self::from_store(store, config))
    }
}

impl ServiceContainer for Services {
    fn languages(&self) -> Arc<dyn LanguageService> {
        self.language_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }
}

static SHARED: Lazy<AppResult<Services>> = Lazy::new(|| {
    let config = LearningServiceConfig::from_env();
    tracing::info!(?config, "Building shared service container");
    Services::in_memory(&config)
});

/// The process-wide container, built on first use.
///
/// Every caller sees the same store, so preference updates made through one
/// handle are visible through all others until the process exits.
pub fn shared() -> AppResult<&'static Services> {
    SHARED
        .as_ref()
        .map_err(|e| AppError::internal(format!("service container unavailable: {}", e)))
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(
        f1: F1,
        f2: F2,
        f3: F3,
    ) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    ///
    /// # Example
    /// ```ignore
    /// let lookups: Vec<_> = languages
    ///     .iter()
    ///     .map(|l| services.courses().get_courses_for_language(&l.id))
    ///     .collect();
    /// let courses = parallel::join_all(lookups).await?;
    /// ```
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}
