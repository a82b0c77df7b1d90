//! Container-level tests over the seeded in-memory store.

use std::sync::Arc;

use learning_service_lib::repository::{
    CourseRepository, InMemoryCourseRepository, InMemoryLanguageRepository, LanguageRepository,
};
use learning_service_lib::{LearningServiceConfig, MemoryStore, ServiceContainer, Services};

use common::AppError;
use domain::{ProficiencyLevel, UserPreferences, UserProgress};

fn services() -> Services {
    Services::in_memory(&LearningServiceConfig::default()).expect("fixtures seed")
}

// =============================================================================
// Lookups
// =============================================================================

#[tokio::test]
async fn test_language_3_is_swahili() {
    let language = services()
        .languages()
        .get_language("3")
        .await
        .unwrap()
        .expect("Swahili fixture");

    assert_eq!(language.name, "Swahili");
    assert_eq!(language.speaker_count, 15_000_000);
    assert_eq!(language.difficulty, ProficiencyLevel::Beginner);
}

#[tokio::test]
async fn test_unknown_ids_resolve_to_none_across_repositories() {
    let store = Arc::new(MemoryStore::seeded().unwrap());
    let languages = InMemoryLanguageRepository::new(store.clone());
    let courses = InMemoryCourseRepository::new(store, 3);

    for id in ["0", "99", "", "swahili"] {
        assert!(languages.get_by_id(id).await.unwrap().is_none());
        assert!(courses.get_by_id(id).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let languages = services().languages();

    let lower = languages.search_languages("zulu").await.unwrap();
    let upper = languages.search_languages("ZULU").await.unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert!(languages.search_languages("").await.unwrap().len() == 6);
}

// =============================================================================
// Derived queries
// =============================================================================

#[tokio::test]
async fn test_popular_languages_over_fixtures() {
    let popular = services()
        .languages()
        .get_popular_languages(Some(3))
        .await
        .unwrap();

    let names: Vec<_> = popular.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Hausa", "Yoruba", "Amharic"]);
}

#[tokio::test]
async fn test_popular_languages_repeat_calls_agree() {
    let languages = services().languages();

    for limit in [None, Some(0), Some(3), Some(6)] {
        let first = languages.get_popular_languages(limit).await.unwrap();
        let second = languages.get_popular_languages(limit).await.unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_popular_languages_limit_above_size() {
    let popular = services()
        .languages()
        .get_popular_languages(Some(50))
        .await
        .unwrap();
    assert_eq!(popular.len(), 6);
}

#[tokio::test]
async fn test_swahili_advanced_courses() {
    let courses = services()
        .courses()
        .get_courses_by_level("3", ProficiencyLevel::Advanced)
        .await
        .unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Swahili Advanced");
}

#[tokio::test]
async fn test_courses_by_level_matches_both_keys() {
    let courses = services().courses();
    for language_id in ["1", "2", "3", "4", "5", "6"] {
        for level in [
            ProficiencyLevel::Beginner,
            ProficiencyLevel::Intermediate,
            ProficiencyLevel::Advanced,
        ] {
            for course in courses.get_courses_by_level(language_id, level).await.unwrap() {
                assert_eq!(course.level, level);
                assert_eq!(course.language_id, language_id);
            }
        }
    }
}

#[tokio::test]
async fn test_recommended_prefix_respects_config() {
    let config = LearningServiceConfig {
        recommended_limit: 2,
        ..Default::default()
    };
    let services = Services::in_memory(&config).unwrap();

    let recommended = services.courses().get_recommended_courses("1").await.unwrap();
    let ids: Vec<_> = recommended.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_progress_scenarios() {
    let users = services().users();

    let progress = users.get_progress("1").await.unwrap();
    let language_ids: Vec<_> = progress
        .languages
        .iter()
        .map(|p| p.language_id.as_str())
        .collect();
    assert_eq!(language_ids, vec!["1", "3"]);

    assert_eq!(
        users.get_progress("does-not-exist").await.unwrap(),
        UserProgress::empty("does-not-exist")
    );
}

#[tokio::test]
async fn test_update_then_get_round_trip() {
    let users = services().users();
    let before = users.get_user("1").await.unwrap().unwrap();

    let patch = UserPreferences {
        email: Some("amara@new.example.com".to_string()),
        ..Default::default()
    };
    let updated = users.update_preferences("1", patch).await.unwrap();
    let reloaded = users.get_user("1").await.unwrap().unwrap();

    assert_eq!(reloaded, updated);
    assert_eq!(reloaded.email, "amara@new.example.com");
    assert_eq!(reloaded.full_name, before.full_name);
    assert!(reloaded.updated_at > before.updated_at);
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let result = services()
        .users()
        .update_preferences("does-not-exist", UserPreferences::default())
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_concurrent_updates_serialize() {
    let services = services();
    let users = services.users();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let users = users.clone();
            tokio::spawn(async move {
                let patch = UserPreferences {
                    region: Some(format!("Region {}", i)),
                    ..Default::default()
                };
                users.update_preferences("2", patch).await
            })
        })
        .collect();

    let mut stamps = Vec::new();
    for handle in handles {
        stamps.push(handle.await.unwrap().unwrap().updated_at);
    }
    stamps.sort();
    stamps.dedup();
    assert_eq!(stamps.len(), 8, "every update gets its own timestamp");
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_lists_active_languages_with_their_courses() {
    let catalog = services().catalog().get_catalog().await.unwrap();

    let names: Vec<_> = catalog.iter().map(|e| e.language.name.as_str()).collect();
    assert_eq!(names, vec!["Yoruba", "Zulu", "Swahili", "Amharic", "Hausa"]);

    let swahili = &catalog[2];
    assert_eq!(swahili.courses.len(), 3);
    for entry in &catalog {
        assert!(entry.courses.iter().all(|c| c.language_id == entry.language.id));
    }
}

#[tokio::test]
async fn test_dashboard_scenarios() {
    let catalog = services().catalog();

    let dashboard = catalog.get_dashboard("1").await.unwrap().expect("user 1");
    assert_eq!(dashboard.user.full_name, "Amara Okafor");
    assert_eq!(dashboard.progress.languages.len(), 2);
    assert_eq!(dashboard.total_xp, 1650);
    assert_eq!(dashboard.best_streak, 7);
    assert_eq!(dashboard.recommended_courses.len(), 3);

    assert!(catalog.get_dashboard("nope").await.unwrap().is_none());
}
