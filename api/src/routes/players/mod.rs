//! Routes for the `/player` endpoint group. Players are always returned
//! with their `team` (or `null`).

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_player;
use get::{get_player, list_players};
use post::create_player;
use put::update_player;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/player` route group.
///
/// - `GET /player` → `list_players`
/// - `GET /player/{id}` → `get_player`
/// - `POST /player` → `create_player`
/// - `PUT /player/{id}` → `update_player`
/// - `DELETE /player/{id}` → `delete_player`
pub fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players))
        .route("/", post(create_player))
        .route("/{id}", get(get_player))
        .route("/{id}", put(update_player))
        .route("/{id}", delete(delete_player))
}
