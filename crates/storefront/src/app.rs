//! Router assembly.
//!
//! [`build_router`] wires the routes, uploaded media, the middleware stack and
//! the Sentry layers into one service. The binary and the integration tests
//! both serve this router.

use axum::{Router, extract::Request, middleware::from_fn, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Span;

use crate::config::MEDIA_URL;
use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::routes;
use crate::state::AppState;

/// Build the complete storefront application.
pub fn build_router(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let media = ServeDir::new(&state.config().media_root);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes(state.config()))
        .nest_service(MEDIA_URL, media)
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Span for one HTTP request. `request_id` is filled in by the request ID middleware.
fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{
        StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    };
    use axum::response::Response;
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::middleware::REQUEST_ID_HEADER;
    use crate::routes::images::IMAGE_FIELD;
    use crate::services::{ImageStorage, ImageStorageError, ImageUpload};

    const BOUNDARY: &str = "online-store-test-boundary";

    /// Storage that records nothing and returns a URL derived from the file name.
    struct EchoStorage;

    #[async_trait]
    impl ImageStorage for EchoStorage {
        async fn store(&self, upload: ImageUpload) -> Result<String, ImageStorageError> {
            if upload.bytes.is_empty() {
                return Err(ImageStorageError::EmptyUpload);
            }
            Ok(format!(
                "/media/echo-{}",
                upload.file_name.unwrap_or_default()
            ))
        }
    }

    fn app() -> Router {
        let config = StorefrontConfig::local(std::env::temp_dir());
        build_router(AppState::with_image_storage(config, Arc::new(EchoStorage)))
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn multipart_body(field: &str, file_name: &str, contents: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: image/png\r\n\r\n\
             {contents}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn upload_request(body: String) -> axum::http::Request<Body> {
        axum::http::Request::post("/images")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap()
    }

    /// The `name=value` part of the session cookie set by `response`.
    fn session_cookie(response: &Response) -> String {
        let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        header.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = app().oneshot(get_request("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_static_pages() {
        for (uri, expected) in [
            ("/", "Welcome to the Online Store"),
            ("/about", "About us"),
            ("/contact", "correo@ejemplo.com"),
        ] {
            let response = app().oneshot(get_request(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains(expected), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_create_route_wins_over_detail() {
        let response = app()
            .oneshot(get_request("/products/create", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("name=\"price\""));
    }

    #[tokio::test]
    async fn test_unknown_product_redirects_home() {
        let response = app()
            .oneshot(get_request("/products/abc", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn test_create_product_form_post() {
        let request = axum::http::Request::post("/products/create")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Lamp&price=25"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Product Created"));
        assert!(html.contains("Lamp"));
        assert!(html.contains("$25.00"));
    }

    #[tokio::test]
    async fn test_cart_flow_with_session_cookie() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                axum::http::Request::post("/cart/add/121")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/cart");
        let cookie = session_cookie(&response);

        let response = app
            .oneshot(get_request("/cart", Some(&cookie)))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("data-cart-item=\"121\""));
        assert!(!html.contains("data-cart-item=\"11\""));
    }

    #[tokio::test]
    async fn test_upload_then_show() {
        let app = app();

        let response = app
            .clone()
            .oneshot(upload_request(multipart_body(IMAGE_FIELD, "cat.png", "png")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/images");
        let cookie = session_cookie(&response);

        let response = app
            .oneshot(get_request("/images", Some(&cookie)))
            .await
            .unwrap();
        assert!(body_text(response).await.contains("echo-cat.png"));
    }

    #[tokio::test]
    async fn test_upload_without_image_field() {
        let response = app()
            .oneshot(upload_request(multipart_body("avatar", "cat.png", "png")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
