//! Access guards applied with `axum::middleware::from_fn` as route layers.

use crate::auth::claims::{AuthUser, Claims};
use crate::response::AppError;
use axum::{
    body::Body,
    extract::{FromRequestParts, Path},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use util::config;

/// Extracts the user from the bearer token and stores it in the request
/// extensions for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), AppError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Whether the token holder may change or remove the user `target_id`.
///
/// Allowed for the user themselves and for the administrative account.
/// Emails are stored and looked up case-sensitively, so the admin match is
/// exact as well.
pub fn can_modify_user(claims: &Claims, target_id: Option<i64>, admin_email: &str) -> bool {
    if claims.email == admin_email {
        return true;
    }
    target_id == Some(claims.sub)
}

/// Owner-or-admin guard for routes with an `{id}` user parameter.
pub async fn allow_self_or_admin(
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (req, AuthUser(claims)) = extract_and_insert_authuser(req).await?;

    let target_id = params.get("id").and_then(|s| s.parse::<i64>().ok());

    if !can_modify_user(&claims, target_id, &config::admin_email()) {
        tracing::warn!(
            user = claims.sub,
            target = ?target_id,
            "Rejected user modification"
        );
        return Err(AppError::unauthorized(
            "You are not authorized to perform this operation",
        ));
    }

    Ok(next.run(req).await)
}
