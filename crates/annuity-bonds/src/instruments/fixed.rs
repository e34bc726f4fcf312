//! Fixed coupon bond instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// A fixed coupon bond specification.
///
/// An immutable value type: `term_years` equal coupon payments of
/// `coupon_rate * face_value` each, plus the face value repaid at
/// maturity. The coupon rate is a per-period fraction (0.05 for 5%).
///
/// All fields are validated non-negative at construction; nothing is
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCouponBond {
    coupon_rate: Decimal,
    term_years: u32,
    face_value: Decimal,
}

impl FixedCouponBond {
    /// Creates a new fixed coupon bond.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSpec`] if the coupon rate or face value
    /// is negative.
    pub fn new(coupon_rate: Decimal, term_years: u32, face_value: Decimal) -> BondResult<Self> {
        if coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }
        if face_value < Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "face value must be non-negative, got {face_value}"
            )));
        }

        Ok(Self {
            coupon_rate,
            term_years,
            face_value,
        })
    }

    /// The per-period coupon rate as a fraction (0.05 for 5%).
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// The number of coupon periods until maturity.
    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// The principal repaid at maturity.
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// The per-period coupon payment: `coupon_rate * face_value`.
    pub fn coupon_payment(&self) -> Decimal {
        self.coupon_rate * self.face_value
    }
}
