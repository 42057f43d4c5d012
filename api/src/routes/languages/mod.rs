//! Routes for the `/language` endpoint group, backed by hand-written SQL.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_language;
use get::{get_language, list_languages, search_languages};
use post::create_language;
use put::update_language;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/language` route group.
///
/// - `GET /language` → `list_languages`
/// - `GET /language/name/{name}` → `search_languages`
/// - `GET /language/{id}` → `get_language`
/// - `POST /language` → `create_language`
/// - `PUT /language/{id}` → `update_language`
/// - `DELETE /language/{id}` → `delete_language`
pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages))
        .route("/", post(create_language))
        .route("/name/{name}", get(search_languages))
        .route("/{id}", get(get_language))
        .route("/{id}", put(update_language))
        .route("/{id}", delete(delete_language))
}
