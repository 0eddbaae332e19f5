//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::{MEDIA_URL, StorefrontConfig};
use crate::services::{ImageStorage, LocalImageStorage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the image storage backend.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    image_storage: Arc<dyn ImageStorage>,
}

impl AppState {
    /// Create a new application state storing images on the local filesystem.
    ///
    /// Uploads are written under `config.media_root` and served at
    /// [`MEDIA_URL`].
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage = LocalImageStorage::new(config.media_root.clone(), MEDIA_URL);
        Self::with_image_storage(config, Arc::new(storage))
    }

    /// Create a new application state with a specific image storage backend.
    #[must_use]
    pub fn with_image_storage(
        config: StorefrontConfig,
        image_storage: Arc<dyn ImageStorage>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                image_storage,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the image storage backend.
    #[must_use]
    pub fn image_storage(&self) -> &dyn ImageStorage {
        self.inner.image_storage.as_ref()
    }
}
