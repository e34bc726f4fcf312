//! Yield command implementation.
//!
//! Solves for the yield implied by an observed price.

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use annuity_bonds::pricing::YieldSolver;

use crate::cli::OutputFormat;
use crate::commands::{build_bond, validate_coupon, validate_face, validate_price};
use crate::output::{print_output, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    /// Annual coupon rate as a fraction (e.g., 0.05 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Term in years (number of coupon payments)
    #[arg(short, long)]
    pub term: u32,

    /// Face value repaid at maturity
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Observed bond price
    #[arg(short, long)]
    pub price: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let coupon = validate_coupon(args.coupon)?;
    let face = validate_face(args.face)?;
    let price = validate_price(args.price)?;

    let bond = build_bond(coupon, args.term, face)?;
    let solver = YieldSolver::new();

    // Time only the core calculation, not argument handling
    let start = Instant::now();
    let result = solver.solve(&bond, price)?;
    let elapsed = start.elapsed();

    let mut results = vec![KeyValue::new("Yield", format!("{:.7}", result.yield_value))];
    if !quiet {
        results.push(KeyValue::new("Coupon", format!("{coupon}")));
        results.push(KeyValue::new("Term", format!("{} years", args.term)));
        results.push(KeyValue::new("Face Value", format!("{face}")));
        results.push(KeyValue::new("Target Price", format!("{price}")));
        results.push(KeyValue::new("Iterations", format!("{}", result.iterations)));
        results.push(KeyValue::new("Residual", format!("{:.2e}", result.residual)));
        results.push(KeyValue::new("Elapsed", format!("{} ns", elapsed.as_nanos())));
    }

    print_output(&results, format)
}
