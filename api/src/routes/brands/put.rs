use super::common::UpdateBrandRequest;
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use db::models::brand::{ActiveModel as BrandActiveModel, Entity as BrandEntity, Model as BrandModel};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

/// PUT /brand/{id}
///
/// Merges the provided fields onto the brand. `"logoImage": null` clears
/// the logo.
///
/// ### Request Body
/// ```json
/// { "name": "Seat", "logoImage": "public/..." }
/// ```
///
/// ### Responses
/// - `200 OK` → updated Brand
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → `{ "error": "Brand not found" }`
pub async fn update_brand(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateBrandRequest>,
) -> Result<Json<BrandModel>, AppError> {
    let id = parse_id(&id, "Brand")?;
    let db = app_state.db();

    let brand = BrandEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    let mut active: BrandActiveModel = brand.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(logo_image) = req.logo_image {
        active.logo_image = Set(logo_image);
    }
    active.updated_at = Set(Utc::now());

    Ok(Json(active.update(db).await?))
}
