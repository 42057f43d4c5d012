use super::common::{UpdatePlayerRequest, ensure_team};
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use db::models::player::{
    ActiveModel as PlayerActiveModel, Entity as PlayerEntity, Model as PlayerModel, PlayerWithTeam,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

/// PUT /player/{id}
///
/// `teamId: null` removes the player from their team; leaving `teamId` out
/// keeps it.
///
/// ### Responses
/// - `200 OK` → Player with `team`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → `{ "error": "Player not found" }` or `{ "error": "Team not found" }`
pub async fn update_player(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdatePlayerRequest>,
) -> Result<Json<PlayerWithTeam>, AppError> {
    let id = parse_id(&id, "Player")?;
    let db = app_state.db();

    let player = PlayerEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Player not found"))?;

    ensure_team(db, req.team_id.flatten()).await?;

    let mut active: PlayerActiveModel = player.into();
    if let Some(first_name) = req.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(shirt_number) = req.shirt_number {
        active.shirt_number = Set(shirt_number);
    }
    if let Some(team_id) = req.team_id {
        active.team_id = Set(team_id);
    }
    active.updated_at = Set(Utc::now());
    let player = active.update(db).await?;

    let player = PlayerModel::with_team(db, vec![player])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("updated player vanished".into()))?;
    Ok(Json(player))
}
