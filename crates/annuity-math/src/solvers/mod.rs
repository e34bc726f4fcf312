//! Root-finding algorithms.
//!
//! This module provides the numerical machinery for inverting monotone
//! pricing functions:
//!
//! - [`bisection`]: Simple and reliable bracketing method with linear
//!   convergence and guaranteed termination
//!
//! Bisection halves the bracket on every step, so an iteration budget of
//! 100 resolves a unit-width bracket far below any tolerance expressible
//! in `f64`. The budget exists to make termination unconditional, not to
//! be reached in practice.
//!
//! # Example: Implied Yield
//!
//! ```rust
//! use annuity_math::solvers::{bisection, SolverConfig};
//!
//! // Zero coupon bond: price(y) = 100 / (1 + y)^5, target price 62.0921
//! let f = |y: f64| 100.0 / (1.0 + y).powi(5) - 62.0921;
//!
//! let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-4);
//! ```

mod bisection;

pub use bisection::bisection;

/// Default absolute tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
