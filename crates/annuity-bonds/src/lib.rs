//! # Annuity Bonds
//!
//! Fixed coupon bond pricing and implied yield for the Annuity workspace.
//!
//! This crate provides:
//!
//! - **Instruments**: [`FixedCouponBond`], an immutable validated bond spec
//! - **Pricing**: closed-form present value via the ordinary annuity formula
//! - **Yield**: [`pricing::YieldSolver`], a bounded bisection search that
//!   inverts the pricing function to recover the rate implied by a price
//!
//! ## Example
//!
//! ```rust
//! use annuity_bonds::instruments::FixedCouponBond;
//! use annuity_bonds::pricing::{present_value, YieldSolver};
//! use rust_decimal_macros::dec;
//!
//! // 5% coupon, 10 years, 1000 face
//! let bond = FixedCouponBond::new(dec!(0.05), 10, dec!(1000)).unwrap();
//!
//! // Discounted at the coupon rate, the bond prices at par
//! let price = present_value(&bond, 0.05).unwrap();
//! assert!((price - 1000.0).abs() < 1e-7);
//!
//! // And the yield implied by the par price is the coupon rate
//! let result = YieldSolver::new().solve(&bond, 1000.0).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod instruments;
pub mod pricing;

pub use error::{BondError, BondResult};
pub use instruments::FixedCouponBond;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::FixedCouponBond;
    pub use crate::pricing::{present_value, YieldResult, YieldSolver};
}
