use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::brand::Model as BrandModel;
use util::state::AppState;

/// DELETE /brand/{id}
///
/// Cars of the brand keep existing with an empty brand reference.
///
/// ### Responses
/// - `200 OK` → the removed Brand
/// - `404 Not Found` → `{ "error": "Brand not found" }`
pub async fn delete_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BrandModel>, AppError> {
    let id = parse_id(&id, "Brand")?;
    BrandModel::delete_returning(app_state.db(), id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Brand not found"))
}
