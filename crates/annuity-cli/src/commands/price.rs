//! Price command implementation.
//!
//! Calculates bond price from a discount rate.

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use annuity_bonds::pricing::present_value;

use crate::cli::OutputFormat;
use crate::commands::{build_bond, validate_coupon, validate_face, validate_rate};
use crate::output::{print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Annual coupon rate as a fraction (e.g., 0.05 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Term in years (number of coupon payments)
    #[arg(short, long)]
    pub term: u32,

    /// Face value repaid at maturity
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Discount rate as a fraction (e.g., 0.04 for 4%)
    #[arg(short, long)]
    pub rate: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let coupon = validate_coupon(args.coupon)?;
    let face = validate_face(args.face)?;
    let rate = validate_rate(args.rate)?;

    let bond = build_bond(coupon, args.term, face)?;

    // Time only the core calculation, not argument handling
    let start = Instant::now();
    let price = present_value(&bond, rate)?;
    let elapsed = start.elapsed();

    let mut results = vec![KeyValue::new("Price", format!("{price:.7}"))];
    if !quiet {
        results.push(KeyValue::new("Coupon", format!("{coupon}")));
        results.push(KeyValue::new("Term", format!("{} years", args.term)));
        results.push(KeyValue::new("Face Value", format!("{face}")));
        results.push(KeyValue::new("Discount Rate", format!("{rate}")));
        results.push(KeyValue::new("Elapsed", format!("{} ns", elapsed.as_nanos())));
    }

    print_output(&results, format)
}
