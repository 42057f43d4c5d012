//! Request plumbing shared by the resource routes.

use crate::response::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use validator::{Validate, ValidationErrors};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `?page=&limit=` query. Kept as strings so bad values produce our own
/// error body instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// Parses into `(page, limit)`, both positive. Defaults to `(1, 10)`.
    ///
    /// `page * limit` must fit in an `i64`, the widest offset SQLite takes.
    pub fn resolve(&self) -> Result<(u64, u64), AppError> {
        let page = parse_positive(self.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_positive(self.limit.as_deref(), DEFAULT_LIMIT);
        match (page, limit) {
            (Some(page), Some(limit))
                if page
                    .checked_mul(limit)
                    .is_some_and(|end| end <= i64::MAX as u64) =>
            {
                Ok((page, limit))
            }
            _ => Err(AppError::bad_request("Params page or limit are not valid")),
        }
    }
}

fn parse_positive(raw: Option<&str>, default: u64) -> Option<u64> {
    match raw {
        None => Some(default),
        Some(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0),
    }
}

/// Parses a path id, answering `400 Invalid <entity> ID format` otherwise.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("Invalid {} ID format", entity.to_lowercase())))
}

/// Formats `validator` errors into one `"; "` separated message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// JSON body extractor that also runs `validator` checks.
///
/// Malformed bodies and failed validation both become `400 {"error": ...}`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::bad_request(format_validation_errors(&e)))?;

        Ok(ValidJson(value))
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
