//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About page
//! GET  /contact                - Contact page
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/{id}          - Product detail (1-based position, else redirect to /)
//! GET  /products/create        - Empty creation form
//! POST /products/create        - Validate submission, confirm or re-render
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add/{product_id}  - Add to cart, redirect to /cart
//! POST /cart/clear             - Empty the cart, redirect to /cart
//!
//! # Images
//! GET  /images                 - Show the last uploaded image
//! POST /images                 - Upload (multipart), redirect to /images
//! ```

pub mod cart;
pub mod home;
pub mod images;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::config::StorefrontConfig;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route(
            "/create",
            get(products::create_form).post(products::create),
        )
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add/{product_id}", post(cart::add))
        .route("/clear", post(cart::clear))
}

/// Create the image routes router.
///
/// Upload bodies are limited to `max_upload_bytes`.
pub fn image_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(images::show).post(images::upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Create all routes for the storefront.
pub fn routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // About and contact
        .merge(pages::router())
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Image upload routes
        .nest("/images", image_routes(config.max_upload_bytes))
}
