//! Daycount command implementation.

use anyhow::Result;
use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::Date;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// Arguments for the daycount command.
#[derive(Args, Debug)]
pub struct DaycountArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,

    /// Convention: 30/360, ACT/360, ACT/ACT. All conventions if omitted.
    #[arg(long)]
    pub convention: Option<DayCountConvention>,
}

/// Day count for one convention.
#[derive(Debug, Serialize, Tabled)]
pub struct DayCountRow {
    #[tabled(rename = "Convention")]
    pub convention: String,
    #[tabled(rename = "Days")]
    pub days: i64,
    #[tabled(rename = "Year Fraction")]
    pub year_fraction: String,
}

/// Execute the daycount command.
pub fn execute(args: DaycountArgs, ctx: &Context) -> Result<()> {
    let conventions = match args.convention {
        Some(convention) => vec![convention],
        None => DayCountConvention::all().to_vec(),
    };

    let rows: Vec<DayCountRow> = conventions
        .iter()
        .map(|convention| DayCountRow {
            convention: convention.to_string(),
            days: convention.day_count(args.start, args.end),
            year_fraction: convention
                .year_fraction(args.start, args.end)
                .round_dp(10)
                .normalize()
                .to_string(),
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Day Count {} to {}", args.start, args.end));
            print_output(&rows, ctx.format)
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.year_fraction);
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, ctx.format),
    }
}
