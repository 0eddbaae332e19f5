//! Services used by route handlers.
//!
//! # Services
//!
//! - `image_storage` - Persisting uploaded images and producing their URLs

pub mod image_storage;

pub use image_storage::{ImageStorage, ImageStorageError, ImageUpload, LocalImageStorage};
