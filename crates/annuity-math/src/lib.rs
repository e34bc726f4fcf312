//! # Annuity Math
//!
//! Numerical root finding for the Annuity bond analytics workspace.
//!
//! This crate provides:
//!
//! - **Solvers**: Bounded-iteration bisection root finding
//! - **Configuration**: Tolerance and iteration budgets via [`solvers::SolverConfig`]
//!
//! ## Design Philosophy
//!
//! - **Guaranteed termination**: every solver is capped by an iteration budget
//! - **Explicit failure**: non-convergence and invalid brackets are errors,
//!   never silently defaulted results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
