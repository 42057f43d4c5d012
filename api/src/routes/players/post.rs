use super::common::{CreatePlayerRequest, ensure_team};
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{Json, extract::State, http::StatusCode};
use db::models::player::{Model as PlayerModel, PlayerWithTeam};
use util::state::AppState;

/// POST /player
///
/// ### Request Body
/// ```json
/// { "firstName": "Lionel", "lastName": "Messi", "shirtNumber": 10, "teamId": 1 }
/// ```
///
/// ### Responses
/// - `201 Created` → Player with `team`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → `{ "error": "Team not found" }`
pub async fn create_player(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerWithTeam>), AppError> {
    let db = app_state.db();
    ensure_team(db, req.team_id).await?;

    let player = PlayerModel::create(
        db,
        &req.first_name,
        &req.last_name,
        req.shirt_number,
        req.team_id,
    )
    .await?;

    let player = PlayerModel::with_team(db, vec![player])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("created player vanished".into()))?;
    Ok((StatusCode::CREATED, Json(player)))
}
