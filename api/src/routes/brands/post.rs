use super::common::CreateBrandRequest;
use crate::response::AppError;
use crate::routes::common::ValidJson;
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use db::models::brand::{Entity as BrandEntity, Model as BrandModel};
use sea_orm::EntityTrait;
use std::path::PathBuf;
use util::{
    paths::{ensure_upload_root, sanitize_file_name, with_original_suffix},
    state::AppState,
};

/// POST /brand
///
/// ### Request Body
/// ```json
/// { "name": "Seat", "logoImage": null }
/// ```
///
/// ### Responses
/// - `201 Created` → Brand
/// - `400 Bad Request` → `{ "error": "Name is required" }`
pub async fn create_brand(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateBrandRequest>,
) -> Result<(StatusCode, Json<BrandModel>), AppError> {
    let brand =
        BrandModel::create(app_state.db(), &req.name, req.logo_image.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// POST /brand/logo-upload
///
/// Multipart form with a `logo` file and a `brandId` text field.
///
/// The file is stored under the upload root with a random name and then
/// renamed to `<stored>_<original file name>`. That path becomes the brand's
/// `logoImage`. Nothing is left on disk when the brand does not exist or the
/// update fails.
///
/// ### Responses
/// - `200 OK` → updated Brand
/// - `400 Bad Request` → `{ "error": "No logo file provided" }`
/// - `404 Not Found` → `{ "error": "Brand not found" }`
pub async fn upload_logo(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BrandModel>, AppError> {
    let mut logo: Option<(String, Vec<u8>)> = None;
    let mut brand_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("logo") => {
                let original = field
                    .file_name()
                    .and_then(sanitize_file_name)
                    .unwrap_or_else(|| "logo".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                logo = Some((original, bytes.to_vec()));
            }
            Some("brandId") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                brand_id = Some(text);
            }
            _ => {}
        }
    }

    let Some((original, bytes)) = logo else {
        return Err(AppError::bad_request("No logo file provided"));
    };

    let brand = match brand_id.as_deref().and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(id) => BrandEntity::find_by_id(id).one(app_state.db()).await?,
        None => None,
    };
    let Some(brand) = brand else {
        return Err(AppError::not_found("Brand not found"));
    };

    let path = store_logo(&original, &bytes).await?;
    let path_str = path.to_string_lossy().to_string();

    match brand.set_logo(app_state.db(), &path_str).await {
        Ok(brand) => {
            tracing::info!(brand_id = brand.id, path = %path_str, "Brand logo updated");
            Ok(Json(brand))
        }
        Err(err) => {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!(path = %path_str, error = %e, "Failed to remove orphaned logo");
            }
            Err(err.into())
        }
    }
}

/// Writes the upload under a random name, then renames it to carry the
/// original file name as a suffix.
async fn store_logo(original: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let root = ensure_upload_root()
        .await
        .map_err(|e| AppError::Internal(format!("upload root: {e}")))?;

    let stored = root.join(uuid::Uuid::new_v4().simple().to_string());
    tokio::fs::write(&stored, bytes)
        .await
        .map_err(|e| AppError::Internal(format!("write {}: {e}", stored.display())))?;

    let renamed = with_original_suffix(&stored, original);
    tokio::fs::rename(&stored, &renamed)
        .await
        .map_err(|e| AppError::Internal(format!("rename {}: {e}", stored.display())))?;

    Ok(renamed)
}
