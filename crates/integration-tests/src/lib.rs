//! Integration tests for the Online Store.
//!
//! Each test starts the full storefront router on an ephemeral port and talks
//! to it over HTTP with a cookie-keeping `reqwest` client, so sessions behave
//! as they do in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p online-store-integration-tests
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use online_store_storefront::app::build_router;
use online_store_storefront::config::StorefrontConfig;
use online_store_storefront::state::AppState;
use reqwest::Client;
use uuid::Uuid;

/// A storefront running in the background for the duration of a test.
pub struct TestServer {
    addr: SocketAddr,
    media_root: PathBuf,
}

impl TestServer {
    /// Start a storefront with uploads written to a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let media_root = std::env::temp_dir().join(format!("online-store-it-{}", Uuid::new_v4()));
        let config = StorefrontConfig::local(&media_root);
        let app = build_router(AppState::new(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self { addr, media_root }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Directory uploads are written to.
    #[must_use]
    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// A client that keeps cookies (and so the session) between requests.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}
