use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use db::filters::fetch_page;
use db::models::player::{
    Column as PlayerColumn, Entity as PlayerEntity, Model as PlayerModel, PlayerWithTeam,
};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /player
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [Player] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_players(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<PlayerWithTeam>>, AppError> {
    let (page, limit) = params.resolve()?;
    let db = app_state.db();

    let query = PlayerEntity::find().order_by_asc(PlayerColumn::Id);
    let (players, total) = fetch_page(db, query, page, limit).await?;
    let players = PlayerModel::with_team(db, players).await?;

    Ok(Json(Page::new(players, total, page, limit)))
}

/// GET /player/{id}
///
/// ### Responses
/// - `200 OK` → Player with `team`
/// - `404 Not Found` → `{ "error": "Player not found" }`
pub async fn get_player(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerWithTeam>, AppError> {
    let id = parse_id(&id, "Player")?;
    PlayerModel::find_with_team(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Player not found"))
}
