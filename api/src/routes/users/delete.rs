use crate::response::AppError;
use crate::routes::common::parse_id;
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::user::Model as UserModel;
use util::state::AppState;

/// DELETE /user/{id}
///
/// Only the user themselves or the administrator may call this. Cars owned by
/// the user remain with an empty owner.
///
/// ### Responses
/// - `200 OK` → the removed User
/// - `401 Unauthorized` → missing token or not owner/admin
/// - `404 Not Found` → `{ "error": "User not found" }`
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserModel>, AppError> {
    let id = parse_id(&id, "User")?;
    let user = UserModel::delete_returning(app_state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    tracing::info!(user_id = user.id, "User deleted");
    Ok(Json(user))
}
