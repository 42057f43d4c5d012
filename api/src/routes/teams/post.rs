use super::common::CreateTeamRequest;
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{Json, extract::State, http::StatusCode};
use db::models::team::{Model as TeamModel, TeamWithPlayers};
use util::state::AppState;

/// POST /team
///
/// ### Request Body
/// ```json
/// { "name": "Dream Team", "city": "Madrid" }
/// ```
///
/// ### Responses
/// - `201 Created` → Team with an empty `players` list
/// - `400 Bad Request` → validation failure
pub async fn create_team(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamWithPlayers>), AppError> {
    let team = TeamModel::create(app_state.db(), &req.name, &req.city).await?;
    Ok((
        StatusCode::CREATED,
        Json(TeamWithPlayers {
            team,
            players: Vec::new(),
        }),
    ))
}
