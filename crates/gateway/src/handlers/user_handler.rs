//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{Course, User, UserPreferences, UserProgress};
use learning_service_lib::service::Dashboard;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Preferences patch with validation. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "amara@example.com")]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 20, message = "Phone number must be 7-20 characters"))]
    #[schema(example = "+2348012345678")]
    pub phone_number: Option<String>,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Amara Okafor")]
    pub full_name: Option<String>,
    /// Interface locale such as "en" or "sw-KE"
    #[validate(length(min = 2, max = 10, message = "Locale must be 2-10 characters"))]
    #[schema(example = "sw")]
    pub preferred_language: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Region cannot be empty"))]
    #[schema(example = "East Africa")]
    pub region: Option<String>,
}

impl From<UpdatePreferencesRequest> for UserPreferences {
    fn from(req: UpdatePreferencesRequest) -> Self {
        Self {
            email: req.email,
            phone_number: req.phone_number,
            full_name: req.full_name,
            preferred_language: req.preferred_language,
            date_of_birth: req.date_of_birth,
            region: req.region,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_user))
        .route("/:id/preferences", put(update_preferences))
        .route("/:id/progress", get(get_progress))
        .route("/:id/recommended-courses", get(recommended_courses))
        .route("/:id/dashboard", get(get_dashboard))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .users()
        .get_user(&id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(user))
}

/// Merge a preferences patch into the user
#[utoipa::path(
    put,
    path = "/users/{id}/preferences",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdatePreferencesRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdatePreferencesRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .users()
        .update_preferences(&id, req.into())
        .await?;
    Ok(Json(user))
}

/// Learning progress, empty for unknown users
#[utoipa::path(
    get,
    path = "/users/{id}/progress",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Progress record", body = UserProgress)
    )
)]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProgress>> {
    let progress = state.services.users().get_progress(&id).await?;
    Ok(Json(progress))
}

#[utoipa::path(
    get,
    path = "/users/{id}/recommended-courses",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Recommended courses", body = Vec<Course>)
    )
)]
pub async fn recommended_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = state
        .services
        .courses()
        .get_recommended_courses(&id)
        .await?;
    Ok(Json(courses))
}

/// User, progress and recommendations in one response
#[utoipa::path(
    get,
    path = "/users/{id}/dashboard",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Dashboard", body = Dashboard),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dashboard>> {
    let dashboard = state
        .services
        .catalog()
        .get_dashboard(&id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(dashboard))
}
