//! Routes for the `/car` endpoint group. Every response carries the car's
//! `brand` and `owner` objects (or `null`).

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_car;
use get::{get_car, list_cars, search_cars_by_brand};
use post::create_car;
use put::update_car;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/car` route group.
///
/// - `GET /car` → `list_cars`
/// - `GET /car/brand/{brand}` → `search_cars_by_brand`
/// - `GET /car/{id}` → `get_car`
/// - `POST /car` → `create_car`
/// - `PUT /car/{id}` → `update_car`
/// - `DELETE /car/{id}` → `delete_car`
pub fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/", post(create_car))
        .route("/brand/{brand}", get(search_cars_by_brand))
        .route("/{id}", get(get_car))
        .route("/{id}", put(update_car))
        .route("/{id}", delete(delete_car))
}
