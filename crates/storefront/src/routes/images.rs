//! Image upload route handlers.
//!
//! The URL of the last uploaded image is kept in the session. Storage is
//! delegated to the [`ImageStorage`](crate::services::ImageStorage) held in
//! [`AppState`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::services::ImageUpload;
use crate::state::AppState;

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "profile_image";

/// Image page template.
#[derive(Template, WebTemplate)]
#[template(path = "images/index.html")]
pub struct ImagesIndexTemplate {
    pub title: &'static str,
    pub image_url: String,
}

/// Display the last uploaded image, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<ImagesIndexTemplate> {
    let image_url = session
        .get::<String>(session_keys::IMAGE_URL)
        .await?
        .unwrap_or_default();

    Ok(ImagesIndexTemplate {
        title: "Images - Online Store",
        image_url,
    })
}

/// Store an uploaded image and remember its URL.
///
/// # Errors
///
/// Returns an error if the body has no image file, the image cannot be
/// stored, or the session cannot be written.
#[instrument(skip(state, session, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<Redirect> {
    let image = read_image_field(multipart).await?;
    let image_url = state.image_storage().store(image).await?;

    session.insert(session_keys::IMAGE_URL, &image_url).await?;

    add_breadcrumb(
        "images",
        "Uploaded image",
        Some(&[("image_url", image_url.as_str())]),
    );
    tracing::info!(image_url = %image_url, "Image uploaded");

    Ok(Redirect::to("/images"))
}

/// Pull the [`IMAGE_FIELD`] file out of the multipart body.
async fn read_image_field(mut multipart: Multipart) -> Result<ImageUpload> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::BadRequest(format!(
        "missing `{IMAGE_FIELD}` file"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(err.body_text())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_show_without_upload() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        let page = show(session).await.unwrap();
        assert_eq!(page.image_url, "");
        assert!(page.render().unwrap().contains("No image uploaded yet."));
    }

    #[tokio::test]
    async fn test_show_stored_url() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session
            .insert(session_keys::IMAGE_URL, "/media/cat.png")
            .await
            .unwrap();

        let page = show(session).await.unwrap();
        assert_eq!(page.image_url, "/media/cat.png");
        assert!(page.render().unwrap().contains("cat.png"));
    }
}
