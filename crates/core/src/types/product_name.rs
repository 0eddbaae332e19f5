//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductNameError {
    /// The input is empty or whitespace.
    #[error("This field is required.")]
    Empty,
}

/// The display name of a product.
///
/// Surrounding whitespace is stripped; the remaining text must not be empty.
///
/// ```
/// use online_store_core::ProductName;
///
/// assert_eq!(ProductName::parse("  Lamp ").unwrap().as_str(), "Lamp");
/// assert!(ProductName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Parse a `ProductName` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ProductNameError::Empty`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ProductNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let name = ProductName::parse("\tDesk Lamp  ").expect("valid name");
        assert_eq!(name.as_str(), "Desk Lamp");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductName::parse(""), Err(ProductNameError::Empty));
        assert_eq!(ProductName::parse(" \n "), Err(ProductNameError::Empty));
    }

    #[test]
    fn test_display() {
        let name = ProductName::parse("Lamp").expect("valid name");
        assert_eq!(name.to_string(), "Lamp");
    }
}
