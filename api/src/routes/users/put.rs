use super::common::UpdateUserRequest;
use crate::response::AppError;
use crate::routes::common::{ValidJson, parse_id};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use db::models::user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

/// PUT /user/{id}
///
/// Merges the provided fields onto the user. A new password is re-hashed.
/// Only the user themselves or the administrator may call this.
///
/// ### Responses
/// - `200 OK` → updated User
/// - `400 Bad Request` → validation failure
/// - `401 Unauthorized` → missing token or not owner/admin
/// - `404 Not Found` → `{ "error": "User not found" }`
/// - `409 Conflict` → email belongs to another user
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<Json<UserModel>, AppError> {
    let id = parse_id(&id, "User")?;
    let db = app_state.db();

    let user = UserEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if let Some(email) = &req.email {
        if UserModel::email_taken(db, email, Some(id)).await? {
            return Err(AppError::conflict("A user with this email already exists"));
        }
    }

    let mut active: UserActiveModel = user.into();
    if let Some(first_name) = req.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        active.last_name = Set(Some(last_name));
    }
    if let Some(email) = req.email {
        active.email = Set(email.trim().to_owned());
    }
    if let Some(password) = req.password {
        active.password_hash = Set(UserModel::hash_password(&password)?);
    }
    active.updated_at = Set(Utc::now());

    Ok(Json(active.update(db).await?))
}
