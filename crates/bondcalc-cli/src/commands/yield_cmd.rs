//! Yield command implementation.
//!
//! Solves for the yield that reproduces an observed clean price.

use anyhow::Result;
use clap::Args;

use crate::commands::{bond_rows, validate_price, BondArgs, Context};
use crate::output::{format_percent, print_key_values, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Observed clean price
    #[arg(short, long)]
    pub price: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.build()?;
    let price = validate_price(args.price)?;
    let calc = ctx.calculator(&bond);

    let result = calc.solve_yield(&bond, price)?;

    let mut results = bond_rows(&bond, &calc);
    results.push(KeyValue::from_f64("Clean Price (Input)", price, 6));
    results.push(KeyValue::new("Yield to Maturity", format_percent(result.yield_value)));
    results.push(KeyValue::new("Iterations", result.iterations.to_string()));
    results.push(KeyValue::new("Residual", format!("{:.3e}", result.residual)));

    print_key_values("Yield Results", &results, ctx.format, "Yield to Maturity")
}
