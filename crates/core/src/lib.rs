//! Online Store Core - Shared domain types.
//!
//! This crate provides the value types used by the storefront:
//! - [`Price`] - decimal amount with a currency, validated to be positive on input
//! - [`ProductName`] - trimmed, non-empty product name
//! - ID newtypes generated with [`define_id!`]
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no I/O, no HTTP,
//! no session access. This keeps it lightweight and trivially testable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
