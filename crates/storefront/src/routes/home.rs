//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Display the home page.
#[instrument]
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        title: "Online Store",
        subtitle: "Welcome to the Online Store",
    }
}
