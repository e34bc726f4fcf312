//! Annuity CLI - Command-line interface for bond pricing and yield.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond from a discount rate
//! annuity price --coupon 0.05 --term 10 --face 1000 --rate 0.05
//!
//! # Solve the yield implied by an observed price
//! annuity yield --coupon 0.05 --term 10 --face 1000 --price 1000
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format, quiet)?,
        Commands::Yield(args) => commands::yields::execute(args, format, quiet)?,
    }

    Ok(())
}
