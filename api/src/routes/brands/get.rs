use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::filters::fetch_page;
use db::models::brand::{Column as BrandColumn, Entity as BrandEntity, Model as BrandModel};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /brand
///
/// Paginated list of brands ordered by id.
///
/// ### Query Parameters
/// - `page` (optional, default 1)
/// - `limit` (optional, default 10)
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [Brand] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_brands(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<BrandModel>>, AppError> {
    let (page, limit) = params.resolve()?;
    let query = BrandEntity::find().order_by_asc(BrandColumn::Id);
    let (brands, total) = fetch_page(app_state.db(), query, page, limit).await?;

    Ok(Json(Page::new(brands, total, page, limit)))
}

/// GET /brand/{id}
///
/// ### Responses
/// - `200 OK` → Brand
/// - `404 Not Found` → `{ "error": "Brand not found" }`
pub async fn get_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BrandModel>, AppError> {
    let id = parse_id(&id, "Brand")?;
    BrandEntity::find_by_id(id)
        .one(app_state.db())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Brand not found"))
}

/// GET /brand/name/{name}
///
/// Brands whose name starts with `{name}`, ignoring case.
///
/// ### Responses
/// - `200 OK` → `[Brand]`
/// - `404 Not Found` → `[]`
pub async fn search_brands(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let brands = BrandModel::find_by_name_prefix(app_state.db(), &name).await?;
    let status = if brands.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Json(brands)).into_response())
}
