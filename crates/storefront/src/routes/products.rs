//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::Path, response::Redirect};
use tracing::instrument;

use online_store_core::{Price, ProductName};

use crate::filters;
use crate::models::catalog::{self, Product};
use crate::models::{ProductFormErrors, ProductFormInput};

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub products: &'static [Product],
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub title: String,
    pub subtitle: String,
    pub product: &'static Product,
}

/// Product creation form template.
///
/// Used both for the empty form and for re-rendering an invalid submission.
#[derive(Template, WebTemplate)]
#[template(path = "products/create.html")]
pub struct ProductCreateTemplate {
    pub title: &'static str,
    pub name: String,
    pub price: String,
    pub errors: ProductFormErrors,
}

/// Product creation confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "products/created.html")]
pub struct ProductCreatedTemplate {
    pub title: &'static str,
    pub name: ProductName,
    pub price: Price,
}

/// Display product listing page.
#[instrument]
pub async fn index() -> ProductsIndexTemplate {
    ProductsIndexTemplate {
        title: "Products - Online Store",
        subtitle: "List of products",
        products: catalog::products(),
    }
}

/// Display product detail page.
///
/// `id` is the 1-based position in the catalog. Anything that does not name
/// a product redirects to the home page.
#[instrument]
pub async fn show(Path(id): Path<String>) -> Result<ProductShowTemplate, Redirect> {
    let Some(product) = catalog::find_by_position(&id) else {
        tracing::debug!(id = %id, "Unknown product position, redirecting home");
        return Err(Redirect::to("/"));
    };

    Ok(ProductShowTemplate {
        title: format!("{} - Online Store", product.name),
        subtitle: format!("{} - Product information", product.name),
        product,
    })
}

/// Display an empty product creation form.
#[instrument]
pub async fn create_form() -> ProductCreateTemplate {
    ProductCreateTemplate {
        title: "Create product",
        name: String::new(),
        price: String::new(),
        errors: ProductFormErrors::default(),
    }
}

/// Validate a product submission.
///
/// A valid submission renders a confirmation; the catalog itself is never
/// modified. An invalid one re-renders the form with the input preserved.
#[instrument(skip(input))]
pub async fn create(
    Form(input): Form<ProductFormInput>,
) -> Result<ProductCreatedTemplate, ProductCreateTemplate> {
    match input.validate() {
        Ok(product) => {
            tracing::info!(name = %product.name, price = %product.price, "Product submission accepted");
            Ok(ProductCreatedTemplate {
                title: "Product Created",
                name: product.name,
                price: product.price,
            })
        }
        Err(errors) => {
            tracing::debug!(?errors, "Product submission rejected");
            Err(ProductCreateTemplate {
                title: "Create product",
                name: input.name,
                price: input.price,
                errors,
            })
        }
    }
}
