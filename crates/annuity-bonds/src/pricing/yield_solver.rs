//! Implied yield solver.
//!
//! Inverts the closed-form pricer with a bounded bisection search: the
//! bond price is strictly decreasing in the discount rate (for any bond
//! with a positive term and positive coupon and/or face value), so the
//! rate producing a target price is the unique root of
//! `present_value(bond, y) - target` on the search interval.
//!
//! # Example
//!
//! ```rust
//! use annuity_bonds::instruments::FixedCouponBond;
//! use annuity_bonds::pricing::YieldSolver;
//! use rust_decimal_macros::dec;
//!
//! let bond = FixedCouponBond::new(dec!(0.05), 10, dec!(1000)).unwrap();
//!
//! let result = YieldSolver::new().solve(&bond, 1000.0).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-7);
//! ```

use rust_decimal::prelude::*;

use annuity_math::solvers::{bisection, SolverConfig};
use annuity_math::MathError;

use crate::error::{BondError, BondResult};
use crate::instruments::FixedCouponBond;
use crate::pricing::pv;

/// Default absolute price tolerance for convergence.
pub const DEFAULT_PRICE_TOLERANCE: f64 = 1e-7;

/// Default search bounds for the discount rate.
pub const DEFAULT_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final price residual (should be near zero).
    pub residual: f64,
}

/// Implied yield solver.
///
/// Uses bisection over a fixed rate interval, converging when the priced
/// residual falls within an absolute tolerance. Iteration is bounded, so
/// the solver always terminates: a target price outside the range
/// achievable on the interval fails with [`BondError::PriceOutOfRange`]
/// instead of searching forever.
#[derive(Debug, Clone)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Rate search interval.
    bounds: (f64, f64),
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-7 (absolute, on price)
    /// Default max iterations: 100
    /// Default search bounds: [0, 1]
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_PRICE_TOLERANCE, 100),
            bounds: DEFAULT_BOUNDS,
        }
    }

    /// Sets the absolute price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the rate search bounds.
    ///
    /// The default `[0, 1]` interval cannot solve bonds whose implied
    /// yield lies outside it (deep-discount instruments, for example);
    /// widening the interval here extends the searchable range. Both
    /// bounds must be greater than -1 so the discount factor stays
    /// defined.
    #[must_use]
    pub fn with_bounds(mut self, low: f64, high: f64) -> Self {
        self.bounds = (low, high);
        self
    }

    /// Solves for the yield implied by a target price.
    ///
    /// # Errors
    ///
    /// - [`BondError::InvalidPrice`] if the target is negative or not finite
    /// - [`BondError::PriceOutOfRange`] if no rate within the bounds can
    ///   produce the target price
    /// - [`BondError::YieldConvergenceFailed`] if the iteration budget is
    ///   exhausted before the residual meets the tolerance
    pub fn solve(&self, bond: &FixedCouponBond, target_price: f64) -> BondResult<YieldResult> {
        if !target_price.is_finite() || target_price < 0.0 {
            return Err(BondError::invalid_price(format!(
                "target price must be finite and non-negative, got {target_price}"
            )));
        }

        // Convert the spec to f64 once for the solver hot path
        let cp = bond.coupon_payment().to_f64().unwrap_or(0.0);
        let face = bond.face_value().to_f64().unwrap_or(0.0);
        let term = bond.term_years();

        let objective = |y: f64| pv(cp, term, face, y) - target_price;

        let (a, b) = self.bounds;
        match bisection(objective, a, b, &self.config) {
            Ok(result) => Ok(YieldResult {
                yield_value: result.root,
                iterations: result.iterations,
                residual: result.residual,
            }),
            Err(MathError::InvalidBracket { .. }) => {
                let lo = a.min(b);
                let hi = a.max(b);
                Err(BondError::PriceOutOfRange {
                    price: target_price,
                    min: pv(cp, term, face, hi),
                    max: pv(cp, term, face, lo),
                })
            }
            Err(MathError::ConvergenceFailed { iterations, .. }) => {
                Err(BondError::YieldConvergenceFailed { iterations })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::present_value;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn bond(coupon: Decimal, term: u32, face: Decimal) -> FixedCouponBond {
        FixedCouponBond::new(coupon, term, face).unwrap()
    }

    #[test]
    fn test_yield_at_par() {
        // A bond priced at par yields its coupon rate
        let b = bond(dec!(0.05), 10, dec!(1000));

        let result = YieldSolver::new().solve(&b, 1000.0).unwrap();

        assert_relative_eq!(result.yield_value, 0.05, epsilon = 1e-7);
        assert!(result.residual.abs() <= DEFAULT_PRICE_TOLERANCE);
    }

    #[test]
    fn test_discount_scenario_roundtrip() {
        // 3% coupon, 5 years, 100 face priced at 4% then solved back
        let b = bond(dec!(0.03), 5, dec!(100));

        let price = present_value(&b, 0.04).unwrap();
        let result = YieldSolver::new().solve(&b, price).unwrap();

        assert_relative_eq!(result.yield_value, 0.04, epsilon = 1e-7);
    }

    #[test]
    fn test_discount_bond_yields_above_coupon() {
        let b = bond(dec!(0.05), 10, dec!(1000));

        let result = YieldSolver::new().solve(&b, 950.0).unwrap();

        assert!(result.yield_value > 0.05);
        assert!(result.yield_value < 0.10);
    }

    #[test]
    fn test_premium_bond_yields_below_coupon() {
        let b = bond(dec!(0.05), 10, dec!(1000));

        let result = YieldSolver::new().solve(&b, 1050.0).unwrap();

        assert!(result.yield_value < 0.05);
        assert!(result.yield_value > 0.0);
    }

    #[test]
    fn test_tolerance_bound() {
        // The price at a converged yield reproduces the target within 1e-7
        let b = bond(dec!(0.04), 7, dec!(500));

        for target in [450.0, 480.0, 500.0, 510.0] {
            let result = YieldSolver::new().solve(&b, target).unwrap();
            let repriced = present_value(&b, result.yield_value).unwrap();
            assert!(
                (repriced - target).abs() <= DEFAULT_PRICE_TOLERANCE,
                "residual {} exceeds tolerance for target {target}",
                (repriced - target).abs()
            );
        }
    }

    #[test]
    fn test_target_above_range() {
        // Max achievable price is at rate 0: face + n * coupon = 1500
        let b = bond(dec!(0.05), 10, dec!(1000));

        let err = YieldSolver::new().solve(&b, 2000.0).unwrap_err();

        match err {
            BondError::PriceOutOfRange { price, min, max } => {
                assert_relative_eq!(price, 2000.0);
                assert_relative_eq!(max, 1500.0, epsilon = 1e-9);
                assert!(min < max);
            }
            other => panic!("Expected PriceOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_target_below_range() {
        let b = bond(dec!(0.05), 10, dec!(1000));

        let err = YieldSolver::new().solve(&b, 10.0).unwrap_err();

        assert!(matches!(err, BondError::PriceOutOfRange { .. }));
    }

    #[test]
    fn test_zero_term_bond() {
        // Price is face for every rate: only the face is solvable
        let b = bond(dec!(0.05), 0, dec!(1000));

        let result = YieldSolver::new().solve(&b, 1000.0).unwrap();
        assert_eq!(result.iterations, 0);

        let err = YieldSolver::new().solve(&b, 990.0).unwrap_err();
        assert!(matches!(err, BondError::PriceOutOfRange { .. }));
    }

    #[test]
    fn test_invalid_target_price() {
        let b = bond(dec!(0.05), 10, dec!(1000));
        let solver = YieldSolver::new();

        assert!(matches!(
            solver.solve(&b, -1.0),
            Err(BondError::InvalidPrice { .. })
        ));
        assert!(matches!(
            solver.solve(&b, f64::NAN),
            Err(BondError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_iterations_bounded() {
        let b = bond(dec!(0.05), 10, dec!(1000));

        let result = YieldSolver::new().solve(&b, 973.5).unwrap();

        assert!(result.iterations < 100);
    }

    #[test]
    fn test_widened_bounds() {
        // Deep discount: implied yield above 1, unreachable by default
        let b = bond(dec!(0.05), 10, dec!(1000));

        let err = YieldSolver::new().solve(&b, 40.0).unwrap_err();
        assert!(matches!(err, BondError::PriceOutOfRange { .. }));

        let result = YieldSolver::new()
            .with_bounds(0.0, 2.0)
            .solve(&b, 40.0)
            .unwrap();
        assert!(result.yield_value > 1.0);

        let repriced = present_value(&b, result.yield_value).unwrap();
        assert!((repriced - 40.0).abs() <= DEFAULT_PRICE_TOLERANCE);
    }

    #[test]
    fn test_custom_tolerance_and_budget() {
        let b = bond(dec!(0.05), 10, dec!(1000));

        // A budget too small for a tight tolerance must fail explicitly
        let err = YieldSolver::new()
            .with_tolerance(1e-12)
            .with_max_iterations(5)
            .solve(&b, 973.5)
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::YieldConvergenceFailed { iterations: 5 }
        ));
    }

    proptest! {
        #[test]
        // Rate and face ranges keep the price slope steep enough that the
        // 1e-7 price tolerance pins the yield to well under 1e-6.
        fn prop_price_yield_roundtrip(
            coupon in 0.0f64..0.15,
            term in 1u32..30,
            face in 50.0f64..10_000.0,
            rate in 0.005f64..0.60,
        ) {
            let b = FixedCouponBond::new(
                Decimal::from_f64_retain(coupon).unwrap(),
                term,
                Decimal::from_f64_retain(face).unwrap(),
            )
            .unwrap();

            let price = present_value(&b, rate).unwrap();
            let result = YieldSolver::new().solve(&b, price).unwrap();

            prop_assert!(result.residual.abs() <= DEFAULT_PRICE_TOLERANCE);
            prop_assert!(
                (result.yield_value - rate).abs() < 1e-6,
                "recovered {} from rate {}",
                result.yield_value,
                rate
            );
        }
    }
}
