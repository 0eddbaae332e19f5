//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from user input.
///
/// The `Display` strings are shown next to the form field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is empty or whitespace.
    #[error("This field is required.")]
    Empty,
    /// The input is not a decimal number.
    #[error("Enter a number.")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("El precio debe ser mayor a 0.")]
    NotPositive,
}

/// A price with currency information.
///
/// ## Examples
///
/// ```
/// use online_store_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(500, 0), CurrencyCode::USD);
/// assert_eq!(price.to_string(), "$500.00");
///
/// assert!(Price::parse_positive("25").is_ok());
/// assert!(Price::parse_positive("0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency from a whole amount.
    #[must_use]
    pub fn whole(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::default())
    }

    /// Parse a price entered by a user.
    ///
    /// Surrounding whitespace is ignored. Plain decimals (`25`, `19.99`) and
    /// scientific notation (`1e3`) are accepted. The result uses the default
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or whitespace
    /// - Is not a number
    /// - Is zero or negative
    pub fn parse_positive(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::NotANumber)?;

        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        Ok(Self::new(amount, CurrencyCode::default()))
    }
}

/// Shows at least two decimal places and never drops significant digits:
/// `$25.00`, `$19.99`, `$0.001`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount.normalize();
        let symbol = self.currency_code.symbol();
        if amount.scale() > 2 {
            write!(f, "{symbol}{amount}")
        } else {
            write!(f, "{symbol}{amount:.2}")
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Symbol used when displaying an amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}
