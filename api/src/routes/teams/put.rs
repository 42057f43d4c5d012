use super::common::UpdateTeamRequest;
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use db::models::team::{
    ActiveModel as TeamActiveModel, Entity as TeamEntity, Model as TeamModel, TeamWithPlayers,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

/// PUT /team/{id}
///
/// ### Responses
/// - `200 OK` → Team with `players`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → `{ "error": "Team not found" }`
pub async fn update_team(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateTeamRequest>,
) -> Result<Json<TeamWithPlayers>, AppError> {
    let id = parse_id(&id, "Team")?;
    let db = app_state.db();

    let team = TeamEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let mut active: TeamActiveModel = team.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(city) = req.city {
        active.city = Set(city);
    }
    active.updated_at = Set(Utc::now());
    let team = active.update(db).await?;

    let team = TeamModel::with_players(db, vec![team])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("updated team vanished".into()))?;
    Ok(Json(team))
}
