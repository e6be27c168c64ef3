//! Price command implementation.
//!
//! Calculates the clean price from a yield, and the dirty price when a
//! settlement date is given.

use anyhow::Result;
use bondcalc_core::types::Date;
use clap::Args;

use crate::commands::{bond_rows, validate_yield, BondArgs, Context};
use crate::output::{format_percent, print_key_values, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity (as percentage, e.g., 6.0 for 6%)
    #[arg(short = 'y', long = "yield")]
    pub yield_pct: f64,

    /// Settlement date (YYYY-MM-DD) for accrued interest and dirty price
    #[arg(short, long)]
    pub settle: Option<Date>,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.build()?;
    let ytm = validate_yield(args.yield_pct)? / 100.0;
    let calc = ctx.calculator(&bond);

    let clean_price = calc.clean_price(&bond, ytm)?;

    let mut results = bond_rows(&bond, &calc);
    results.push(KeyValue::new("Yield", format_percent(ytm)));
    results.push(KeyValue::from_f64("Clean Price", clean_price, 6));

    if let Some(settle) = args.settle {
        let accrued = calc.accrued_interest(&bond, settle)?;
        let dirty_price = calc.dirty_price(&bond, ytm, settle)?;

        results.push(KeyValue::new("Settlement", settle.to_string()));
        results.push(KeyValue::from_f64("Accrued Interest", accrued, 6));
        results.push(KeyValue::from_f64("Dirty Price", dirty_price, 6));
    }

    print_key_values("Bond Pricing Results", &results, ctx.format, "Clean Price")
}
