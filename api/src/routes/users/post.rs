use super::common::{CreateUserRequest, LoginRequest, LoginResponse};
use crate::auth::generate_jwt;
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{Json, extract::State, http::StatusCode};
use db::models::user::Model as UserModel;
use sea_orm::SqlErr;
use util::state::AppState;

/// POST /user
///
/// ### Request Body
/// ```json
/// { "firstName": "Ana", "lastName": "García", "email": "ana@example.com", "password": "12345678" }
/// ```
///
/// ### Responses
/// - `201 Created` → User (no password)
/// - `400 Bad Request` → validation failure
/// - `409 Conflict` → `{ "error": "A user with this email already exists" }`
pub async fn create_user(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserModel>), AppError> {
    let db = app_state.db();

    if UserModel::email_taken(db, &req.email, None).await? {
        return Err(AppError::conflict("A user with this email already exists"));
    }

    let user = UserModel::create(
        db,
        &req.first_name,
        req.last_name.as_deref(),
        &req.email,
        &req.password,
    )
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::conflict("A user with this email already exists")
        }
        _ => AppError::from(e),
    })?;

    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /user/login
///
/// ### Request Body
/// ```json
/// { "email": "ana@example.com", "password": "12345678" }
/// ```
///
/// ### Responses
/// - `200 OK` → `{ "token": "<jwt>" }`
/// - `400 Bad Request` → `{ "error": "Both email and password must be provided" }`
/// - `401 Unauthorized` → `{ "error": "Invalid email and/or password" }`
pub async fn login(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (Some(email), Some(password)) = (
        req.email.filter(|e| !e.trim().is_empty()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::bad_request(
            "Both email and password must be provided",
        ));
    };

    let Some(user) = UserModel::verify_credentials(app_state.db(), &email, &password).await? else {
        tracing::info!(email = %email, "Failed login");
        return Err(AppError::unauthorized("Invalid email and/or password"));
    };

    let (token, _expiry) = generate_jwt(user.id, &user.email)
        .map_err(|e| AppError::Internal(format!("token encoding failed: {e}")))?;

    Ok(Json(LoginResponse { token }))
}
