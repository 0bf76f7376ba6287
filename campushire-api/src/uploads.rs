//! Profile image storage
//!
//! Uploaded images land in the configured upload directory under a generated
//! name; the database stores the public `/uploads/<file>` path the console
//! serves them from. When a profile image is replaced, the previous file is
//! removed best-effort.

use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// File extensions accepted for profile images
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Public path prefix stored in the database
const PUBLIC_PREFIX: &str = "/uploads/";

/// Extracts the lowercase extension of an uploaded file name, if it is an
/// accepted image type
pub fn image_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Resolves a stored public path back to the file on disk
///
/// Only the file-name component of the stored path is used, so a corrupted
/// value can never reference a file outside the upload directory.
fn disk_path(upload_dir: &Path, public_path: &str) -> Option<PathBuf> {
    let name = Path::new(public_path).file_name()?;
    Some(upload_dir.join(name))
}

/// Writes an uploaded image into the upload directory
///
/// The stored file gets a generated name with the original extension.
/// Returns the public `/uploads/<file>` path to persist in the database.
///
/// # Errors
///
/// - `Validation` if the file name is not an accepted image type
/// - `Internal` if the write fails
pub async fn save_image(upload_dir: &Path, file_name: &str, data: &[u8]) -> ApiResult<String> {
    let ext = image_extension(file_name).ok_or_else(|| {
        ApiError::Validation("Only jpeg, jpg, png and gif images are allowed".to_string())
    })?;

    let stored_name = format!("{}.{}", Uuid::new_v4(), ext);

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&stored_name), data).await?;

    Ok(format!("{}{}", PUBLIC_PREFIX, stored_name))
}

/// Removes a previously stored image, best-effort
///
/// A missing file is not an error; the profile update already succeeded and
/// a stale file is only disk noise.
pub async fn remove_image(upload_dir: &Path, public_path: &str) {
    let Some(path) = disk_path(upload_dir, public_path) else {
        return;
    };

    if let Err(err) = tokio::fs::remove_file(&path).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), "Failed to remove replaced image: {}", err);
        }
    }
}
