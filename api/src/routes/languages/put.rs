use super::common::UpdateLanguageRequest;
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::programming_language::ProgrammingLanguage;
use util::state::AppState;

/// PUT /language/{id}
///
/// ### Responses
/// - `200 OK` → merged Language
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → `{ "error": "Language not found" }`
pub async fn update_language(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateLanguageRequest>,
) -> Result<Json<ProgrammingLanguage>, AppError> {
    let id = parse_id(&id, "Language")?;
    ProgrammingLanguage::update(app_state.db(), id, req.into())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Language not found"))
}
