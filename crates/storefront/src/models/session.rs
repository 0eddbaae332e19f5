//! Session-related types.

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for the set of product IDs added to the cart.
    pub const CART_PRODUCT_DATA: &str = "cart_product_data";

    /// Key for the URL of the most recently uploaded image.
    pub const IMAGE_URL: &str = "image_url";
}
