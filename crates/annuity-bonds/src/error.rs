//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Discount rate outside the pricing domain.
    #[error("Invalid discount rate: {rate}. Must be finite and non-negative")]
    InvalidRate {
        /// The offending rate.
        rate: f64,
    },

    /// Invalid target price.
    #[error("Invalid price: {reason}")]
    InvalidPrice {
        /// Description of what's invalid.
        reason: String,
    },

    /// No rate in the search domain produces the target price.
    #[error("Price {price} is outside the achievable range [{min:.7}, {max:.7}] for this bond")]
    PriceOutOfRange {
        /// The target price.
        price: f64,
        /// Price at the upper rate bound (cheapest achievable).
        min: f64,
        /// Price at the lower rate bound (richest achievable).
        max: f64,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Math library error.
    #[error("Math error: {0}")]
    Math(#[from] annuity_math::MathError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }
}
