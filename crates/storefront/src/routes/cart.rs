//! Cart route handlers.
//!
//! The cart contents live in the session as [`CartProductData`]. Each handler
//! loads it, applies one operation, and writes it back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::cart::{CartProduct, CartProductData, cart_products};
use crate::models::session_keys;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/index.html")]
pub struct CartIndexTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub products: &'static [CartProduct],
    pub cart_products: Vec<&'static CartProduct>,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart contents from the session, empty if none were stored.
async fn load_cart(session: &Session) -> Result<CartProductData> {
    Ok(session
        .get::<CartProductData>(session_keys::CART_PRODUCT_DATA)
        .await?
        .unwrap_or_default())
}

/// Store the cart contents in the session.
async fn save_cart(session: &Session, data: &CartProductData) -> Result<()> {
    session
        .insert(session_keys::CART_PRODUCT_DATA, data)
        .await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartIndexTemplate> {
    let data = load_cart(&session).await?;
    let products = cart_products();

    Ok(CartIndexTemplate {
        title: "Cart - Online Store",
        subtitle: "Shopping Cart",
        products,
        cart_products: data.items_in(products),
    })
}

/// Add a product to the cart and return to the cart page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
#[instrument(skip(session))]
pub async fn add(session: Session, Path(product_id): Path<String>) -> Result<Redirect> {
    let mut data = load_cart(&session).await?;
    data.add(&product_id);
    save_cart(&session, &data).await?;

    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(product_id = %product_id, items = data.len(), "Product added to cart");

    Ok(Redirect::to("/cart"))
}

/// Remove everything from the cart and return to the cart page.
///
/// Clearing an empty cart is a no-op.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    let removed = session
        .remove::<CartProductData>(session_keys::CART_PRODUCT_DATA)
        .await?
        .is_some();

    add_breadcrumb("cart", "Cleared cart", None);
    tracing::info!(removed, "Cart cleared");

    Ok(Redirect::to("/cart"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::{StatusCode, header::LOCATION};
    use axum::response::IntoResponse;
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    /// Add `product_id` and check the handler sends the visitor back to the cart.
    async fn add_product(session: &Session, product_id: &str) {
        let response = add(session.clone(), Path(product_id.to_string()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/cart");
    }

    fn cart_ids(page: &CartIndexTemplate) -> Vec<i32> {
        page.cart_products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[tokio::test]
    async fn test_empty_cart() {
        let page = show(session()).await.unwrap();
        assert_eq!(page.products.len(), 2);
        assert!(page.cart_products.is_empty());
    }

    #[tokio::test]
    async fn test_add_redirects_to_cart() {
        let response = add(session(), Path("121".to_string()))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/cart");
    }

    #[tokio::test]
    async fn test_add_then_show() {
        let session = session();
        add_product(&session, "121").await;

        let page = show(session).await.unwrap();
        assert_eq!(cart_ids(&page), [121]);
        assert_eq!(page.cart_products.first().unwrap().name, "Tv samsung");
    }

    #[tokio::test]
    async fn test_add_twice_is_idempotent() {
        let session = session();
        add_product(&session, "11").await;
        add_product(&session, "11").await;

        let data = load_cart(&session).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(cart_ids(&show(session).await.unwrap()), [11]);
    }

    #[tokio::test]
    async fn test_unknown_product_not_shown() {
        let session = session();
        add_product(&session, "999").await;

        let page = show(session).await.unwrap();
        assert!(page.cart_products.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let session = session();
        add_product(&session, "121").await;
        add_product(&session, "11").await;

        let response = clear(session.clone()).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let page = show(session.clone()).await.unwrap();
        assert!(page.cart_products.is_empty());
        assert!(
            session
                .get::<CartProductData>(session_keys::CART_PRODUCT_DATA)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_clear_empty_cart_is_noop() {
        let response = clear(session()).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/cart");
    }
}
