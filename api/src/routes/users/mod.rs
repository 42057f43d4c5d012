//! # Users Routes Module
//!
//! Routes for the `/user` endpoint group.
//!
//! ## Middleware
//! `PUT` and `DELETE /user/{id}` are wrapped in `allow_self_or_admin`; every
//! other user route is public.

use crate::auth::guards::allow_self_or_admin;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use delete::delete_user;
use get::{get_user, list_users, search_users};
use post::{create_user, login};
use put::update_user;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/user` route group.
///
/// - `GET /user` → `list_users`
/// - `GET /user/name/{name}` → `search_users`
/// - `GET /user/{id}` → `get_user`
/// - `POST /user` → `create_user`
/// - `POST /user/login` → `login`
/// - `PUT /user/{id}` → `update_user` (owner or admin)
/// - `DELETE /user/{id}` → `delete_user` (owner or admin)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/login", post(login))
        .route("/name/{name}", get(search_users))
        .route(
            "/{id}",
            get(get_user).merge(
                put(update_user)
                    .delete(delete_user)
                    .route_layer(from_fn(allow_self_or_admin)),
            ),
        )
}
