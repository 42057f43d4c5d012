use crate::routes::common::double_option;
use db::models::programming_language::{LanguageFields, LanguagePatch};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLanguageRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub released_year: i32,
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub githut_rank: Option<i32>,
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub pypl_rank: Option<i32>,
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub tiobe_rank: Option<i32>,
}

impl From<CreateLanguageRequest> for LanguageFields {
    fn from(req: CreateLanguageRequest) -> Self {
        Self {
            name: req.name,
            released_year: req.released_year,
            githut_rank: req.githut_rank,
            pypl_rank: req.pypl_rank,
            tiobe_rank: req.tiobe_rank,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLanguageRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub released_year: Option<i32>,
    /// `null` clears the rank.
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub githut_rank: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub pypl_rank: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 1, message = "Ranks start at 1"))]
    pub tiobe_rank: Option<Option<i32>>,
}

impl From<UpdateLanguageRequest> for LanguagePatch {
    fn from(req: UpdateLanguageRequest) -> Self {
        Self {
            name: req.name,
            released_year: req.released_year,
            githut_rank: req.githut_rank,
            pypl_rank: req.pypl_rank,
            tiobe_rank: req.tiobe_rank,
        }
    }
}
