//! Course and catalog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use domain::Course;
use learning_service_lib::service::LanguageCourses;

use crate::state::AppState;

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_course))
}

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/", get(get_catalog))
}

/// Get course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "Courses",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Course>> {
    let course = state
        .services
        .courses()
        .get_course(&id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(course))
}

/// Active languages with their courses
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "Courses",
    responses(
        (status = 200, description = "Catalog", body = Vec<LanguageCourses>)
    )
)]
pub async fn get_catalog(State(state): State<AppState>) -> AppResult<Json<Vec<LanguageCourses>>> {
    let catalog = state.services.catalog().get_catalog().await?;
    Ok(Json(catalog))
}
