//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{Course, Language, LanguageProgress, ProficiencyLevel, User, UserProgress, UserRole};
use learning_service_lib::service::{Dashboard, LanguageCourses};

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::user_handler::UpdatePreferencesRequest;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::language_handler::list_languages,
        crate::handlers::language_handler::popular_languages,
        crate::handlers::language_handler::get_language,
        crate::handlers::language_handler::language_courses,
        crate::handlers::course_handler::get_course,
        crate::handlers::course_handler::get_catalog,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_preferences,
        crate::handlers::user_handler::get_progress,
        crate::handlers::user_handler::recommended_courses,
        crate::handlers::user_handler::get_dashboard,
    ),
    components(
        schemas(
            HealthResponse,
            Language,
            Course,
            ProficiencyLevel,
            User,
            UserRole,
            UserProgress,
            LanguageProgress,
            LanguageCourses,
            Dashboard,
            UpdatePreferencesRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Languages", description = "Language catalog endpoints"),
        (name = "Courses", description = "Course and catalog endpoints"),
        (name = "Users", description = "Learner profile and progress endpoints"),
    )
)]
pub struct ApiDoc;
