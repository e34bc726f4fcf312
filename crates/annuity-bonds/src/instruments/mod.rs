//! Bond instruments.

mod fixed;

pub use fixed::FixedCouponBond;
