//! Core types for the Online Store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product_name;

pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use product_name::{ProductName, ProductNameError};
