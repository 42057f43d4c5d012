use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::car::Model as CarModel;
use util::state::AppState;

/// DELETE /car/{id}
///
/// ### Responses
/// - `200 OK` → the removed Car
/// - `404 Not Found` → `{ "error": "Car not found" }`
pub async fn delete_car(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarModel>, AppError> {
    let id = parse_id(&id, "Car")?;
    CarModel::delete_returning(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Car not found"))
}
