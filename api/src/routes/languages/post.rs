use super::common::CreateLanguageRequest;
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{Json, extract::State, http::StatusCode};
use db::models::programming_language::ProgrammingLanguage;
use util::state::AppState;

/// POST /language
///
/// ### Request Body
/// ```json
/// { "name": "Rust", "releasedYear": 2010, "githutRank": 14, "pyplRank": 9, "tiobeRank": 13 }
/// ```
///
/// ### Responses
/// - `201 Created` → Language
/// - `400 Bad Request` → validation failure
pub async fn create_language(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateLanguageRequest>,
) -> Result<(StatusCode, Json<ProgrammingLanguage>), AppError> {
    let language = ProgrammingLanguage::create(app_state.db(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(language)))
}
