use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::player::Model as PlayerModel;
use util::state::AppState;

/// DELETE /player/{id}
///
/// ### Responses
/// - `200 OK` → the removed Player
/// - `404 Not Found` → `{ "error": "Player not found" }`
pub async fn delete_player(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerModel>, AppError> {
    let id = parse_id(&id, "Player")?;
    PlayerModel::delete_returning(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Player not found"))
}
