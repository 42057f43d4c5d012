use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use db::models::programming_language::ProgrammingLanguage;
use util::state::AppState;

/// GET /language
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [Language] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_languages(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProgrammingLanguage>>, AppError> {
    let (page, limit) = params.resolve()?;
    let (languages, total) = ProgrammingLanguage::list(app_state.db(), page, limit).await?;

    Ok(Json(Page::new(languages, total, page, limit)))
}

/// GET /language/{id}
///
/// ### Responses
/// - `200 OK` → Language
/// - `404 Not Found` → `{ "error": "Language not found" }`
pub async fn get_language(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgrammingLanguage>, AppError> {
    let id = parse_id(&id, "Language")?;
    ProgrammingLanguage::find_by_id(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Language not found"))
}

/// GET /language/name/{name}
///
/// ### Responses
/// - `200 OK` → `[Language]`
/// - `404 Not Found` → `{ "error": "Language not found" }`
pub async fn search_languages(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ProgrammingLanguage>>, AppError> {
    let languages = ProgrammingLanguage::find_by_name_prefix(app_state.db(), &name).await?;
    if languages.is_empty() {
        return Err(AppError::not_found("Language not found"));
    }
    Ok(Json(languages))
}
