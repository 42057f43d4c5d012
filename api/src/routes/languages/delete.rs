use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::programming_language::ProgrammingLanguage;
use util::state::AppState;

/// DELETE /language/{id}
///
/// ### Responses
/// - `200 OK` → the removed Language
/// - `404 Not Found` → `{ "error": "Language not found" }`
pub async fn delete_language(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgrammingLanguage>, AppError> {
    let id = parse_id(&id, "Language")?;
    ProgrammingLanguage::delete_returning(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Language not found"))
}
