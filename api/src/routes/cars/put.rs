use super::common::{UpdateCarRequest, ensure_references};
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use db::models::car::{
    ActiveModel as CarActiveModel, CarWithRelations, Entity as CarEntity, Model as CarModel,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

/// PUT /car/{id}
///
/// Merges the provided fields onto the car. `brandId: null` or
/// `ownerId: null` clears that reference.
///
/// ### Responses
/// - `200 OK` → Car with `brand` and `owner`
/// - `400 Bad Request` → validation failure or unknown brand/owner
/// - `404 Not Found` → `{ "error": "Car not found" }`
pub async fn update_car(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateCarRequest>,
) -> Result<Json<CarWithRelations>, AppError> {
    let id = parse_id(&id, "Car")?;
    let db = app_state.db();

    let car = CarEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Car not found"))?;

    ensure_references(db, req.brand_id.flatten(), req.owner_id.flatten()).await?;

    let mut active: CarActiveModel = car.into();
    if let Some(model) = req.model {
        active.model = Set(model);
    }
    if let Some(plate) = req.plate {
        active.plate = Set(plate);
    }
    if let Some(power) = req.power {
        active.power = Set(Some(power));
    }
    if let Some(brand_id) = req.brand_id {
        active.brand_id = Set(brand_id);
    }
    if let Some(owner_id) = req.owner_id {
        active.owner_id = Set(owner_id);
    }
    active.updated_at = Set(Utc::now());

    let car = active.update(db).await?;
    let car = CarModel::with_relations(db, vec![car])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("updated car vanished".into()))?;
    Ok(Json(car))
}
