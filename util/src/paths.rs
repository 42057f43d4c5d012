use crate::config;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Upload root (absolute), from `config::upload_root()`.
/// If relative in env, resolve against current_dir().
pub fn upload_root() -> PathBuf {
    let p = PathBuf::from(config::upload_root());
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Create the upload root if it doesn't exist, and return it.
pub async fn ensure_upload_root() -> io::Result<PathBuf> {
    let root = upload_root();
    tokio::fs::create_dir_all(&root).await?;
    Ok(root)
}

/// Strips any directory components from a client supplied file name.
///
/// Returns `None` when nothing usable is left (e.g. `".."` or `""`).
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

/// `<stored>_<original>`: the final name of an uploaded logo.
pub fn with_original_suffix(stored: &Path, original: &str) -> PathBuf {
    let mut name = stored.as_os_str().to_os_string();
    name.push("_");
    name.push(original);
    PathBuf::from(name)
}
