//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A bracketing method that repeatedly halves the interval and keeps the
/// half containing the sign change. Convergence is tested on the residual
/// only: the iteration stops once `|f(mid)| <= tolerance`. The bracket
/// width is not used as a stopping criterion, so a returned root always
/// satisfies the caller's residual tolerance.
///
/// Requires: `f(a)` and `f(b)` have opposite signs (a bracketed root).
/// A reversed bracket (`a > b`) is normalized before searching.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, [`MathError::InvalidBracket`] when no
/// root is bracketed, or [`MathError::ConvergenceFailed`] if the iteration
/// budget is exhausted before the residual meets the tolerance.
///
/// # Example
///
/// ```rust
/// use annuity_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-7);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Endpoints may already satisfy the tolerance
    if f_lo.abs() <= config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi.abs() <= config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    // A root must be bracketed before halving starts
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut f_mid = f_lo;
    for iteration in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        f_mid = f(mid);

        if f_mid.abs() <= config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        // Keep the half where the sign change lives
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f_mid.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const DEFAULT_TOL: f64 = crate::solvers::DEFAULT_TOLERANCE;
    const DEFAULT_ITERS: u32 = crate::solvers::DEFAULT_MAX_ITERATIONS;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-7);
        assert!(result.residual.abs() <= DEFAULT_TOL);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 2.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-7);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        // Both endpoints have same sign
        let result = bisection(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 1.0;

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-10);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_decreasing_function() {
        // Monotone decreasing, like a bond price in yield
        let f = |x: f64| 1.0 - 2.0 * x;

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_budget_exhaustion() {
        let f = |x: f64| x * x - 2.0;

        // Tolerance unreachable in 3 halvings of a unit bracket
        let config = SolverConfig::new(1e-12, 3);
        let result = bisection(f, 1.0, 2.0, &config);

        match result {
            Err(MathError::ConvergenceFailed { iterations, .. }) => assert_eq!(iterations, 3),
            other => panic!("Expected ConvergenceFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_iterations_within_budget() {
        let f = |x: f64| x * x * x - 5.0;

        let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(result.iterations < DEFAULT_ITERS);
    }

    proptest! {
        #[test]
        fn prop_linear_root_recovered(root in 0.01f64..0.99, slope in 1.0f64..1000.0) {
            // f is monotone decreasing on [0, 1] with a known root
            let f = |x: f64| slope * (root - x);

            let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

            prop_assert!(result.residual.abs() <= DEFAULT_TOL);
            prop_assert!((result.root - root).abs() <= DEFAULT_TOL / slope + 1e-12);
        }
    }
}
