//! Routes for the `/team` endpoint group. Teams are always returned with
//! their `players`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_team;
use get::{get_team, list_teams};
use post::create_team;
use put::update_team;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/team` route group.
///
/// - `GET /team` → `list_teams`
/// - `GET /team/{id}` → `get_team`
/// - `POST /team` → `create_team`
/// - `PUT /team/{id}` → `update_team`
/// - `DELETE /team/{id}` → `delete_team`
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams))
        .route("/", post(create_team))
        .route("/{id}", get(get_team))
        .route("/{id}", put(update_team))
        .route("/{id}", delete(delete_team))
}
