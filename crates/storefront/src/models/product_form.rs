//! Product creation form.
//!
//! The form has two fields, `name` and `price`. Validation either yields a
//! [`NewProduct`] or per-field error messages for re-rendering the form.

use serde::Deserialize;

use online_store_core::{Price, ProductName};

/// Raw form submission.
///
/// Missing fields deserialize as empty strings so that they surface as
/// "required" errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// A validated product submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
}

/// Field-level validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl ProductFormInput {
    /// Validate the submission.
    ///
    /// # Errors
    ///
    /// Returns the messages for every invalid field.
    pub fn validate(&self) -> Result<NewProduct, ProductFormErrors> {
        match (
            ProductName::parse(&self.name),
            Price::parse_positive(&self.price),
        ) {
            (Ok(name), Ok(price)) => Ok(NewProduct { name, price }),
            (name, price) => Err(ProductFormErrors {
                name: name.err().map(|e| e.to_string()),
                price: price.err().map(|e| e.to_string()),
            }),
        }
    }
}
