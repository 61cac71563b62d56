//! Validated price representation.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(f64),
    /// The amount is NaN or infinite.
    #[error("price must be a finite number")]
    NotFinite,
}

/// A non-negative product price.
///
/// Stored as a plain floating-point amount (the database column is `REAL`);
/// validation happens at construction so a negative or non-finite value
/// never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a new price, rejecting negative and non-finite amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for amounts below zero and
    /// [`PriceError::NotFinite`] for NaN or infinite amounts.
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if amount < 0.0 {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(9.99).is_ok());
        assert!(Price::new(1_000_000.0).is_ok());
    }

    #[test]
    fn test_new_negative() {
        assert!(matches!(Price::new(-1.0), Err(PriceError::Negative(_))));
        assert!(matches!(Price::new(-0.01), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_new_not_finite() {
        assert!(matches!(Price::new(f64::NAN), Err(PriceError::NotFinite)));
        assert!(matches!(
            Price::new(f64::INFINITY),
            Err(PriceError::NotFinite)
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::new(9.99).unwrap().to_string(), "9.99");
        assert_eq!(Price::new(5.0).unwrap().to_string(), "5.00");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new(9.99).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "9.99");
    }
}
