use crate::config::AppConfig;
use tempfile::TempDir;

/// Creates a unique temporary directory and points the upload root at it
/// for the duration of the test. The directory is removed when the returned
/// `TempDir` is dropped.
///
/// Keep the returned `TempDir` in scope for as long as you need the files.
pub fn setup_test_upload_root() -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let abs = tmp
        .path()
        .canonicalize()
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    AppConfig::set_upload_root(abs.to_string_lossy().to_string());
    tmp
}

/// Pins the auth related settings to known values.
pub fn setup_test_auth() {
    AppConfig::set_env("test");
    AppConfig::set_jwt_secret("test-secret");
    AppConfig::set_jwt_duration_minutes(60);
    AppConfig::set_admin_email("admin@gmail.com");
}
