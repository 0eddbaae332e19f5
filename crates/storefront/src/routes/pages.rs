//! Static informational page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

/// Display the About page.
#[instrument]
pub async fn about() -> AboutTemplate {
    AboutTemplate {
        title: "About us - Online Store",
        subtitle: "About us",
        description: "This is an about page ...",
        author: "Developed by: David",
    }
}

/// Display the Contact page.
#[instrument]
pub async fn contact() -> ContactTemplate {
    ContactTemplate {
        title: "Contacto",
        subtitle: "Contáctanos",
        email: "correo@ejemplo.com",
        address: "Calle 123 #321, Medellín, Colombia",
        phone: "+57 300101001",
    }
}

/// Create the pages routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/about", get(about))
        .route("/contact", get(contact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_about_view_data() {
        let page = about().await;
        assert_eq!(page.title, "About us - Online Store");
        assert_eq!(page.author, "Developed by: David");
    }

    #[tokio::test]
    async fn test_contact_renders_fields() {
        let html = contact().await.render().expect("template renders");
        assert!(html.contains("correo@ejemplo.com"));
        assert!(html.contains("+57 300101001"));
    }
}
