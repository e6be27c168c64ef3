//! Accrued command implementation.

use anyhow::Result;
use bondcalc_bonds::Instrument;
use bondcalc_core::types::Date;
use clap::Args;

use crate::commands::{bond_rows, BondArgs, Context};
use crate::output::{print_key_values, KeyValue};

/// Arguments for the accrued command.
#[derive(Args, Debug)]
pub struct AccruedArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Settlement date (YYYY-MM-DD)
    #[arg(short, long)]
    pub settle: Date,
}

/// Execute the accrued command.
pub fn execute(args: AccruedArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.build()?;
    let calc = ctx.calculator(&bond);

    let accrued = calc.accrued_interest(&bond, args.settle)?;
    let previous = bond.previous_payment_date(args.settle)?;

    let mut results = bond_rows(&bond, &calc);
    results.push(KeyValue::new("Settlement", args.settle.to_string()));
    results.push(KeyValue::new("Previous Payment", previous.to_string()));
    results.push(KeyValue::new(
        "Accrual Fraction",
        bond.day_count()
            .year_fraction(previous, args.settle)
            .round_dp(10)
            .normalize()
            .to_string(),
    ));
    results.push(KeyValue::from_f64("Accrued Interest", accrued, 6));

    print_key_values("Accrued Interest", &results, ctx.format, "Accrued Interest")
}
