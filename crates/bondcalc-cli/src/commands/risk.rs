//! Risk command implementation.
//!
//! Reports price, Macaulay and modified duration, convexity, and the
//! duration + convexity price-change estimate for a symmetric yield shift.

use anyhow::Result;
use bondcalc_bonds::pricing::DiscountedCashFlow;
use clap::{ArgGroup, Args};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{bond_rows, validate_price, validate_yield, BondArgs, Context};
use crate::error::CliError;
use crate::output::{format_percent, print_header, print_key_values, print_output, KeyValue};

/// Arguments for the risk command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["yield_pct", "price"])))]
pub struct RiskArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity (as percentage)
    #[arg(short = 'y', long = "yield")]
    pub yield_pct: Option<f64>,

    /// Clean price; the yield is solved first
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Yield shift for the price-change estimate, in basis points
    #[arg(long, default_value = "100")]
    pub shift_bps: f64,

    /// Show the discounted cash-flow table instead of the summary
    #[arg(long)]
    pub cash_flows: bool,
}

/// One row of the discounted cash-flow table.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "#")]
    pub period: usize,
    #[tabled(rename = "Time (y)")]
    pub time: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Discount Factor")]
    pub discount_factor: String,
    #[tabled(rename = "PV")]
    pub present_value: String,
}

impl CashFlowRow {
    fn new(period: usize, cf: &DiscountedCashFlow) -> Self {
        Self {
            period,
            time: format!("{:.6}", cf.time),
            amount: format!("{:.6}", cf.amount),
            discount_factor: format!("{:.8}", cf.discount_factor),
            present_value: format!("{:.6}", cf.present_value),
        }
    }
}

/// Execute the risk command.
pub fn execute(args: RiskArgs, ctx: &Context) -> Result<()> {
    let bond = args.bond.build()?;
    let calc = ctx.calculator(&bond);

    let ytm = match (args.yield_pct, args.price) {
        (Some(yield_pct), _) => validate_yield(yield_pct)? / 100.0,
        (None, Some(price)) => calc.solve_yield(&bond, validate_price(price)?)?.yield_value,
        (None, None) => return Err(CliError::MissingArgument("--yield or --price".into()).into()),
    };

    if args.cash_flows {
        let rows: Vec<CashFlowRow> = calc
            .cash_flow_table(&bond, ytm)?
            .iter()
            .enumerate()
            .map(|(i, cf)| CashFlowRow::new(i + 1, cf))
            .collect();
        if ctx.format == OutputFormat::Table {
            print_header("Discounted Cash Flows");
        }
        return print_output(&rows, ctx.format);
    }

    let analytics = calc.analytics(&bond, ytm)?;
    let shift = args.shift_bps / 10_000.0;

    let mut results = bond_rows(&bond, &calc);
    results.push(KeyValue::new("Yield", format_percent(ytm)));
    results.push(KeyValue::from_f64("Clean Price", analytics.clean_price, 6));
    results.push(KeyValue::from_f64("Macaulay Duration", analytics.macaulay_duration, 6));
    results.push(KeyValue::from_f64("Modified Duration", analytics.modified_duration, 6));
    results.push(KeyValue::from_f64("Convexity", analytics.convexity, 6));
    results.push(KeyValue::from_f64(
        format!("Price Change (+{} bp)", args.shift_bps),
        analytics.price_change(shift),
        6,
    ));
    results.push(KeyValue::from_f64(
        format!("Price Change (-{} bp)", args.shift_bps),
        analytics.price_change(-shift),
        6,
    ));

    print_key_values("Risk Metrics", &results, ctx.format, "Modified Duration")
}
