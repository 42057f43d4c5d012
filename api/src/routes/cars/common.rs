use crate::response::AppError;
use crate::routes::common::double_option;
use db::models::car::{MissingReference, Model as CarModel};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Plate is required"))]
    pub plate: String,
    #[validate(range(min = 0, message = "Power must not be negative"))]
    pub power: Option<i32>,
    pub brand_id: Option<i64>,
    pub owner_id: Option<i64>,
}

/// `brandId`/`ownerId`: omitted keeps the reference, `null` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, message = "Model must not be empty"))]
    pub model: Option<String>,
    #[validate(length(min = 1, message = "Plate must not be empty"))]
    pub plate: Option<String>,
    #[validate(range(min = 0, message = "Power must not be negative"))]
    pub power: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub brand_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub owner_id: Option<Option<i64>>,
}

/// Fails with `400` when a referenced brand or owner does not exist.
pub async fn ensure_references(
    db: &DatabaseConnection,
    brand_id: Option<i64>,
    owner_id: Option<i64>,
) -> Result<(), AppError> {
    match CarModel::check_references(db, brand_id, owner_id).await? {
        None => Ok(()),
        Some(MissingReference::Brand(id)) => {
            Err(AppError::bad_request(format!("Brand {id} does not exist")))
        }
        Some(MissingReference::Owner(id)) => {
            Err(AppError::bad_request(format!("User {id} does not exist")))
        }
    }
}
