use super::common::{CreateCarRequest, ensure_references};
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{Json, extract::State, http::StatusCode};
use db::models::car::{CarWithRelations, Model as CarModel, NewCar};
use util::state::AppState;

/// POST /car
///
/// ### Request Body
/// ```json
/// { "model": "Ibiza", "plate": "1234ABC", "power": 110, "brandId": 1, "ownerId": 2 }
/// ```
///
/// ### Responses
/// - `201 Created` → Car with `brand` and `owner`
/// - `400 Bad Request` → validation failure or `"Brand 9 does not exist"` /
///   `"User 9 does not exist"`
pub async fn create_car(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateCarRequest>,
) -> Result<(StatusCode, Json<CarWithRelations>), AppError> {
    let db = app_state.db();
    ensure_references(db, req.brand_id, req.owner_id).await?;

    let car = CarModel::create(
        db,
        NewCar {
            model: req.model,
            plate: req.plate,
            power: req.power,
            brand_id: req.brand_id,
            owner_id: req.owner_id,
        },
    )
    .await?;

    let car = CarModel::with_relations(db, vec![car])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("created car vanished".into()))?;
    Ok((StatusCode::CREATED, Json(car)))
}
