//! Bond pricing calculations.
//!
//! This module provides:
//! - [`present_value`]: closed-form price from a discount rate
//! - [`YieldSolver`]: bisection-based implied yield from a price
//! - [`YieldResult`]: result type for yield calculations

mod yield_solver;

pub use yield_solver::{YieldResult, YieldSolver};

use rust_decimal::prelude::*;

use crate::error::{BondError, BondResult};
use crate::instruments::FixedCouponBond;

/// Calculates the present value of a fixed coupon bond.
///
/// Prices `term_years` equal coupon payments via the ordinary annuity
/// formula, plus the discounted face value:
///
/// `price = cp/rate * (1 - (1+rate)^-n) + face * (1+rate)^-n`
///
/// where `cp = coupon_rate * face_value` and `n = term_years`.
///
/// A zero rate is priced at the analytic limit of the formula,
/// `face + n * cp` (undiscounted cash flows), so the function is total on
/// the yield solver's search domain. A zero term prices at face value for
/// any rate.
///
/// # Errors
///
/// Returns [`BondError::InvalidRate`] if `rate` is negative or not finite.
pub fn present_value(bond: &FixedCouponBond, rate: f64) -> BondResult<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(BondError::InvalidRate { rate });
    }

    let cp = bond.coupon_payment().to_f64().unwrap_or(0.0);
    let face = bond.face_value().to_f64().unwrap_or(0.0);

    Ok(pv(cp, bond.term_years(), face, rate))
}

/// Present value kernel in `f64`.
///
/// Callers are responsible for the `rate >= 0` precondition; the zero-rate
/// and zero-term limits are handled here so the kernel never divides by
/// zero.
pub(crate) fn pv(coupon_payment: f64, term_years: u32, face_value: f64, rate: f64) -> f64 {
    if term_years == 0 {
        return face_value;
    }
    if rate == 0.0 {
        // Limit of the annuity formula as rate -> 0
        return face_value + f64::from(term_years) * coupon_payment;
    }

    let df = (1.0 + rate).powi(-(term_years as i32));
    coupon_payment / rate * (1.0 - df) + face_value * df
}
