use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::team::{Model as TeamModel, TeamWithPlayers};
use util::state::AppState;

/// DELETE /team/{id}
///
/// Unlinks every player of the team and deletes the team in one
/// transaction. Nothing changes if any step fails.
///
/// ### Responses
/// - `200 OK` → the removed Team with its now unlinked `players`
/// - `404 Not Found` → `{ "error": "Team not found" }`
pub async fn delete_team(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamWithPlayers>, AppError> {
    let id = parse_id(&id, "Team")?;
    TeamModel::delete_unlinking_players(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Team not found"))
}
