//! Image storage for uploads.
//!
//! Handlers depend on the [`ImageStorage`] trait through
//! [`AppState`](crate::state::AppState); [`LocalImageStorage`] is the
//! implementation used by the binary.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use axum::body::Bytes;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

/// Accepted file extensions, lowercase. `jpeg` is stored as `jpg`.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "gif", "webp"];

/// Errors that can occur while storing an image.
#[derive(Debug, Error)]
pub enum ImageStorageError {
    /// The uploaded file has no content.
    #[error("uploaded file is empty")]
    EmptyUpload,

    /// The file is not a PNG, JPEG, GIF or WebP image.
    #[error("unsupported image type")]
    UnsupportedType,

    /// Writing the file failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// An uploaded image, as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name supplied by the client, if any.
    pub file_name: Option<String>,
    /// Content type supplied by the client, if any.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Bytes,
}

/// Persists uploaded images.
///
/// Every successful call returns a new URL from which the stored image can be
/// fetched. Nothing else observable changes for the caller.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store `upload` and return its URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is empty, is not a supported image, or
    /// cannot be persisted.
    async fn store(&self, upload: ImageUpload) -> Result<String, ImageStorageError>;
}

/// Stores images as files in a local directory.
///
/// Only raster images are accepted: the extension must be one of
/// `png`, `jpg`, `jpeg`, `gif` or `webp`, and a supplied content type must be
/// `image/*`. Anything else could be served back as active content from the
/// media directory.
///
/// Files are named `<uuid>.<ext>` and addressed as `<url_prefix>/<file>`. The
/// directory is expected to be served at `url_prefix`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    url_prefix: String,
}

impl LocalImageStorage {
    /// Create a storage writing into `root` and producing URLs under `url_prefix`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    #[instrument(skip(self, upload), fields(file_name = ?upload.file_name, size = upload.bytes.len()))]
    async fn store(&self, upload: ImageUpload) -> Result<String, ImageStorageError> {
        if upload.bytes.is_empty() {
            return Err(ImageStorageError::EmptyUpload);
        }
        if !is_image_content_type(upload.content_type.as_deref()) {
            return Err(ImageStorageError::UnsupportedType);
        }
        let extension =
            image_extension(upload.file_name.as_deref()).ok_or(ImageStorageError::UnsupportedType)?;

        tokio::fs::create_dir_all(&self.root).await?;

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        tokio::fs::write(self.root.join(&file_name), &upload.bytes).await?;

        tracing::info!(file = %file_name, "Image stored");

        Ok(format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            file_name
        ))
    }
}

/// The stored extension for the client-supplied file name, if it names an
/// accepted image type.
fn image_extension(file_name: Option<&str>) -> Option<&'static str> {
    let ext = Path::new(file_name?).extension()?.to_str()?.to_ascii_lowercase();
    let ext = if ext == "jpeg" { "jpg" } else { ext.as_str() };
    IMAGE_EXTENSIONS.into_iter().find(|allowed| *allowed == ext)
}

/// A missing content type is left to the extension check.
fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
}
