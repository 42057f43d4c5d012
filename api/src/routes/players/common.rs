use crate::response::AppError;
use crate::routes::common::double_option;
use db::models::team::Entity as TeamEntity;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(range(min = 0, message = "Shirt number must not be negative"))]
    pub shirt_number: i32,
    pub team_id: Option<i64>,
}

/// `teamId`: omitted keeps the current team, `null` unlinks.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(range(min = 0, message = "Shirt number must not be negative"))]
    pub shirt_number: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub team_id: Option<Option<i64>>,
}

/// Fails with `404 Team not found` when `team_id` names no team.
pub async fn ensure_team(db: &DatabaseConnection, team_id: Option<i64>) -> Result<(), AppError> {
    let Some(id) = team_id else {
        return Ok(());
    };
    match TeamEntity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(AppError::not_found("Team not found")),
    }
}
