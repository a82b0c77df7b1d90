//! Language handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{AppResult, OptionExt};
use domain::{Course, Language, ProficiencyLevel};
use learning_service_lib::parallel;

use crate::extractors::AppQuery;
use crate::state::AppState;

/// Filters for the language listing. Only one applies, in field order.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    /// Case-insensitive match on name, description or region
    pub q: Option<String>,
    /// Exact region name, e.g. "East Africa"
    pub region: Option<String>,
    /// beginner, intermediate or advanced
    pub difficulty: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularQuery {
    /// Maximum number of languages to return
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LevelQuery {
    /// Restrict to one course level
    pub level: Option<String>,
}

/// Create language routes
pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages))
        .route("/popular", get(popular_languages))
        .route("/:id", get(get_language))
        .route("/:id/courses", get(language_courses))
}

/// List languages, optionally filtered
#[utoipa::path(
    get,
    path = "/languages",
    tag = "Languages",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Matching languages in storage order", body = Vec<Language>),
        (status = 400, description = "Unknown difficulty")
    )
)]
pub async fn list_languages(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LanguageQuery>,
) -> AppResult<Json<Vec<Language>>> {
    let languages = state.services.languages();

    let result = if let Some(q) = query.q {
        languages.search_languages(&q).await?
    } else if let Some(region) = query.region {
        languages.get_languages_by_region(&region).await?
    } else if let Some(difficulty) = query.difficulty {
        let difficulty: ProficiencyLevel = difficulty.parse()?;
        languages.get_languages_by_difficulty(difficulty).await?
    } else {
        languages.get_all_languages().await?
    };

    Ok(Json(result))
}

/// Languages ranked by speaker count
#[utoipa::path(
    get,
    path = "/languages/popular",
    tag = "Languages",
    params(PopularQuery),
    responses(
        (status = 200, description = "Largest languages first", body = Vec<Language>)
    )
)]
pub async fn popular_languages(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PopularQuery>,
) -> AppResult<Json<Vec<Language>>> {
    let languages = state
        .services
        .languages()
        .get_popular_languages(query.limit)
        .await?;
    Ok(Json(languages))
}

/// Get language by ID
#[utoipa::path(
    get,
    path = "/languages/{id}",
    tag = "Languages",
    params(
        ("id" = String, Path, description = "Language ID")
    ),
    responses(
        (status = 200, description = "Language", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Language>> {
    let language = state
        .services
        .languages()
        .get_language(&id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(language))
}

/// Courses of one language
#[utoipa::path(
    get,
    path = "/languages/{id}/courses",
    tag = "Languages",
    params(
        ("id" = String, Path, description = "Language ID"),
        LevelQuery
    ),
    responses(
        (status = 200, description = "Courses in storage order", body = Vec<Course>),
        (status = 400, description = "Unknown level"),
        (status = 404, description = "Language not found")
    )
)]
pub async fn language_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(query): AppQuery<LevelQuery>,
) -> AppResult<Json<Vec<Course>>> {
    let level = query
        .level
        .map(|level| level.parse::<ProficiencyLevel>())
        .transpose()?;

    let languages = state.services.languages();
    let courses = state.services.courses();

    let (language, courses) = parallel::join2(languages.get_language(&id), async {
        match level {
            Some(level) => courses.get_courses_by_level(&id, level).await,
            None => courses.get_courses_for_language(&id).await,
        }
    })
    .await?;

    language.ok_or_not_found()?;
    Ok(Json(courses))
}
