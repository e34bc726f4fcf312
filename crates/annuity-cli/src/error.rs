//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be a non-negative fraction (0.05 for 5%).")]
    InvalidCoupon(f64),

    /// Invalid face value.
    #[error("Invalid face value: {0}. Must be non-negative.")]
    InvalidFace(f64),

    /// Invalid discount rate.
    #[error("Invalid discount rate: {0}. Must be finite and non-negative.")]
    InvalidRate(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be finite and non-negative.")]
    InvalidPrice(f64),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
