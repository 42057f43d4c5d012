//! HTTP route entry point.
//!
//! Routes are organized by resource, each in its own module with one file
//! per HTTP method:
//! - `/health` → uptime probe (public)
//! - `/brand` → brands and logo upload
//! - `/car` → cars with their brand and owner
//! - `/user` → users and login; updates and deletes are owner-or-admin
//! - `/language` → programming language rankings
//! - `/team` → teams with their players
//! - `/player` → players with their team

use crate::routes::{
    brands::brand_routes, cars::car_routes, health::health_routes,
    languages::language_routes, players::player_routes, teams::team_routes, users::user_routes,
};
use axum::Router;
use util::state::AppState;

pub mod brands;
pub mod cars;
pub mod common;
pub mod health;
pub mod languages;
pub mod players;
pub mod teams;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// Request logging, CORS, and static file serving are layered on in `main`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/brand", brand_routes())
        .nest("/car", car_routes())
        .nest("/user", user_routes())
        .nest("/language", language_routes())
        .nest("/team", team_routes())
        .nest("/player", player_routes())
        .with_state(app_state)
}
