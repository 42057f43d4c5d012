//! # Brand Routes Module
//!
//! Routes for the `/brand` endpoint group.
//!
//! ## Structure
//! - `get.rs` — list, fetch by id, prefix search
//! - `post.rs` — create, logo upload
//! - `put.rs` — update
//! - `delete.rs` — delete
//! - `common.rs` — request bodies

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_brand;
use get::{get_brand, list_brands, search_brands};
use post::{create_brand, upload_logo};
use put::update_brand;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/brand` route group.
///
/// - `GET /brand` → `list_brands`
/// - `GET /brand/name/{name}` → `search_brands`
/// - `GET /brand/{id}` → `get_brand`
/// - `POST /brand` → `create_brand`
/// - `POST /brand/logo-upload` → `upload_logo`
/// - `PUT /brand/{id}` → `update_brand`
/// - `DELETE /brand/{id}` → `delete_brand`
pub fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/", post(create_brand))
        .route("/logo-upload", post(upload_logo))
        .route("/name/{name}", get(search_brands))
        .route("/{id}", get(get_brand))
        .route("/{id}", put(update_brand))
        .route("/{id}", delete(delete_brand))
}
