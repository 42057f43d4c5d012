use super::common::{GetUserQuery, UserResponse};
use crate::response::{AppError, Page};
use crate::routes::common::{PageParams, parse_id};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::filters::fetch_page;
use db::models::{
    car::Model as CarModel,
    user::{Column as UserColumn, Entity as UserEntity, Model as UserModel},
};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /user
///
/// Paginated list of users. Password hashes are never included.
///
/// ### Responses
/// - `200 OK` → `{ "totalItems", "totalPages", "currentPage", "data": [User] }`
/// - `400 Bad Request` → `{ "error": "Params page or limit are not valid" }`
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<UserModel>>, AppError> {
    let (page, limit) = params.resolve()?;
    let query = UserEntity::find().order_by_asc(UserColumn::Id);
    let (users, total) = fetch_page(app_state.db(), query, page, limit).await?;

    Ok(Json(Page::new(users, total, page, limit)))
}

/// GET /user/{id}
///
/// ### Query Parameters
/// - `includeCars` (optional): `true` adds the user's `cars`
///
/// ### Responses
/// - `200 OK` → User (with `cars` when requested)
/// - `404 Not Found` → `{ "error": "User not found" }`
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GetUserQuery>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id, "User")?;
    let db = app_state.db();

    let user = UserEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let cars = if query.include_cars() {
        Some(CarModel::find_by_owner(db, user.id).await?)
    } else {
        None
    };

    Ok(Json(UserResponse { user, cars }))
}

/// GET /user/name/{name}
///
/// Users whose first name starts with `{name}`, ignoring case.
///
/// ### Responses
/// - `200 OK` → `[User]`
/// - `404 Not Found` → `[]`
pub async fn search_users(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let users = UserModel::find_by_first_name_prefix(app_state.db(), &name).await?;
    let status = if users.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Json(users)).into_response())
}
