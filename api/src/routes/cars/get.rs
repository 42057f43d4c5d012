use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use db::filters::fetch_page;
use db::models::car::{CarWithRelations, Column as CarColumn, Entity as CarEntity, Model as CarModel};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /car
///
/// Paginated list of cars with `brand` and `owner` populated.
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [Car] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_cars(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<CarWithRelations>>, AppError> {
    let (page, limit) = params.resolve()?;
    let db = app_state.db();

    let query = CarEntity::find().order_by_asc(CarColumn::Id);
    let (cars, total) = fetch_page(db, query, page, limit).await?;
    let cars = CarModel::with_relations(db, cars).await?;

    Ok(Json(Page::new(cars, total, page, limit)))
}

/// GET /car/{id}
///
/// ### Responses
/// - `200 OK` → Car with `brand` and `owner`
/// - `404 Not Found` → `{ "error": "Car not found" }`
pub async fn get_car(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarWithRelations>, AppError> {
    let id = parse_id(&id, "Car")?;
    CarModel::find_with_relations(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Car not found"))
}

/// GET /car/brand/{brand}
///
/// Cars whose brand name starts with `{brand}`, ignoring case.
///
/// ### Responses
/// - `200 OK` → `[Car]`
/// - `404 Not Found` → `{ "error": "There are no cars for this brand" }`
pub async fn search_cars_by_brand(
    State(app_state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<Vec<CarWithRelations>>, AppError> {
    let db = app_state.db();
    let cars = CarModel::find_by_brand_prefix(db, &brand).await?;
    if cars.is_empty() {
        return Err(AppError::not_found("There are no cars for this brand"));
    }

    Ok(Json(CarModel::with_relations(db, cars).await?))
}
