use crate::routes::common::double_option;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub logo_image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// `null` removes the logo reference.
    #[serde(default, deserialize_with = "double_option")]
    pub logo_image: Option<Option<String>>,
}
