//! CLI command implementations.

pub mod price;
pub mod yields;

// Re-export submodules for convenience
pub use price::PriceArgs;
pub use yields::YieldArgs;

use rust_decimal::Decimal;

use annuity_bonds::FixedCouponBond;

use crate::error::{CliError, CliResult};

/// Validates a coupon rate (fraction, e.g. 0.05 for 5%).
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !coupon.is_finite() || coupon < 0.0 {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a face value.
pub fn validate_face(face: f64) -> CliResult<f64> {
    if !face.is_finite() || face < 0.0 {
        return Err(CliError::InvalidFace(face));
    }
    Ok(face)
}

/// Validates a discount rate.
pub fn validate_rate(rate: f64) -> CliResult<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CliError::InvalidRate(rate));
    }
    Ok(rate)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Builds a bond from validated command-line inputs.
pub fn build_bond(coupon: f64, term: u32, face: f64) -> anyhow::Result<FixedCouponBond> {
    let coupon_decimal =
        Decimal::from_f64_retain(coupon).ok_or_else(|| anyhow::anyhow!("Invalid coupon"))?;
    let face_decimal =
        Decimal::from_f64_retain(face).ok_or_else(|| anyhow::anyhow!("Invalid face value"))?;

    Ok(FixedCouponBond::new(coupon_decimal, term, face_decimal)?)
}
