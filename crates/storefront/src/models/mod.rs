//! Domain models for the storefront.
//!
//! - [`catalog`] - the static product catalog behind `/products`
//! - [`cart`] - the cart's product dictionary and the session-held cart contents
//! - [`product_form`] - validation of the product creation form
//! - [`session`] - session key names

pub mod cart;
pub mod catalog;
pub mod product_form;
pub mod session;

pub use cart::{CartProduct, CartProductData};
pub use catalog::Product;
pub use product_form::{NewProduct, ProductFormErrors, ProductFormInput};
pub use session::keys as session_keys;
