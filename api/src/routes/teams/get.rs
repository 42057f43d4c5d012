use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use db::filters::fetch_page;
use db::models::team::{Column as TeamColumn, Entity as TeamEntity, Model as TeamModel, TeamWithPlayers};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /team
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [Team] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_teams(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<TeamWithPlayers>>, AppError> {
    let (page, limit) = params.resolve()?;
    let db = app_state.db();

    let query = TeamEntity::find().order_by_asc(TeamColumn::Id);
    let (teams, total) = fetch_page(db, query, page, limit).await?;
    let teams = TeamModel::with_players(db, teams).await?;

    Ok(Json(Page::new(teams, total, page, limit)))
}

/// GET /team/{id}
///
/// ### Responses
/// - `200 OK` → Team with `players`
/// - `404 Not Found` → `{ "error": "Team not found" }`
pub async fn get_team(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamWithPlayers>, AppError> {
    let id = parse_id(&id, "Team")?;
    TeamModel::find_with_players(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Team not found"))
}
