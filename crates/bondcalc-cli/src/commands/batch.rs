//! Batch command implementation.
//!
//! Values every bond in a CSV file in parallel. Each row carries either a
//! yield or a clean price; a row that fails is reported in the `error`
//! column and does not stop the rest of the file.
//!
//! Columns (header names, any order):
//!
//! | column        | required | notes                                  |
//! |---------------|----------|----------------------------------------|
//! | `id`          | no       | identifier echoed in the output        |
//! | `issue_date`  | yes      | `YYYY-MM-DD`                           |
//! | `term_years`  | one of   | whole years from issue                 |
//! | `maturity`    | one of   | `YYYY-MM-DD`                           |
//! | `coupon_rate` | yes      | decimal, e.g. `0.05`                   |
//! | `frequency`   | no       | defaults to semiannual                 |
//! | `day_count`   | no       | defaults to 30/360                     |
//! | `principal`   | no       | defaults to 100                        |
//! | `yield`       | one of   | decimal, e.g. `0.06`                   |
//! | `price`       | one of   | clean price                            |

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use bondcalc_bonds::{FixedRateBond, Instrument};
use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::{Date, Frequency};
use clap::Args;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::{debug, info};

use crate::commands::Context;
use crate::output::{print_output, print_warning};

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with one bond per row
    pub file: PathBuf,
}

/// One input row.
#[derive(Debug, Clone, Deserialize)]
struct BatchRow {
    #[serde(default)]
    id: Option<String>,
    issue_date: Date,
    #[serde(default)]
    term_years: Option<u32>,
    #[serde(default)]
    maturity: Option<Date>,
    coupon_rate: String,
    #[serde(default)]
    frequency: Option<Frequency>,
    #[serde(default)]
    day_count: Option<DayCountConvention>,
    #[serde(default)]
    principal: Option<String>,
    #[serde(default, rename = "yield")]
    yield_value: Option<f64>,
    #[serde(default)]
    price: Option<f64>,
}

impl BatchRow {
    fn bond(&self) -> Result<FixedRateBond> {
        let coupon_rate = Decimal::from_str(self.coupon_rate.trim())
            .with_context(|| format!("invalid coupon_rate '{}'", self.coupon_rate))?;

        let mut builder = FixedRateBond::builder()
            .issue_date(self.issue_date)
            .coupon_rate(coupon_rate)
            .frequency(self.frequency.unwrap_or_default())
            .day_count(self.day_count.unwrap_or_default());

        if let Some(term) = self.term_years {
            builder = builder.term_years(term);
        }
        if let Some(maturity) = self.maturity {
            builder = builder.maturity(maturity);
        }
        if let Some(ref principal) = self.principal {
            let principal = Decimal::from_str(principal.trim())
                .with_context(|| format!("invalid principal '{principal}'"))?;
            builder = builder.principal(principal);
        }
        if let Some(ref id) = self.id {
            builder = builder.identifier(id.clone());
        }

        Ok(builder.build()?)
    }
}

/// One output row.
#[derive(Debug, Clone, Default, Serialize, Tabled)]
pub struct BatchResult {
    #[tabled(rename = "Row")]
    pub row: usize,
    #[tabled(rename = "ID", display_with = "display_text")]
    pub id: Option<String>,
    #[tabled(rename = "Yield (%)", display_with = "display_number")]
    pub yield_pct: Option<f64>,
    #[tabled(rename = "Clean Price", display_with = "display_number")]
    pub clean_price: Option<f64>,
    #[tabled(rename = "Mac Dur", display_with = "display_number")]
    pub macaulay_duration: Option<f64>,
    #[tabled(rename = "Mod Dur", display_with = "display_number")]
    pub modified_duration: Option<f64>,
    #[tabled(rename = "Convexity", display_with = "display_number")]
    pub convexity: Option<f64>,
    #[tabled(rename = "Error", display_with = "display_text")]
    pub error: Option<String>,
}

fn display_number(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.6}"))
}

fn display_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Execute the batch command.
pub fn execute(args: BatchArgs, ctx: &Context) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&args.file)
        .with_context(|| format!("opening {}", args.file.display()))?;

    let rows: Vec<Result<BatchRow, String>> = reader
        .deserialize::<BatchRow>()
        .map(|r| r.map_err(|e| e.to_string()))
        .collect();

    info!(rows = rows.len(), file = %args.file.display(), "valuing batch");

    let results: Vec<BatchResult> = rows
        .into_par_iter()
        .enumerate()
        .map(|(i, row)| value_row(i + 1, row, ctx))
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        print_warning(&format!("{failed} of {} rows failed", results.len()));
    }

    print_output(&results, ctx.format)
}

fn value_row(row: usize, parsed: Result<BatchRow, String>, ctx: &Context) -> BatchResult {
    let id = parsed.as_ref().ok().and_then(|r| r.id.clone());
    let outcome = parsed
        .map_err(anyhow::Error::msg)
        .and_then(|r| value(&r, ctx));

    match outcome {
        Ok(result) => BatchResult { row, id, ..result },
        Err(e) => {
            debug!(row, error = %e, "batch row failed");
            BatchResult {
                row,
                id,
                error: Some(format!("{e:#}")),
                ..BatchResult::default()
            }
        }
    }
}

fn value(row: &BatchRow, ctx: &Context) -> Result<BatchResult> {
    let bond = row.bond()?;
    let calc = ctx.calculator(&bond);

    let ytm = match (row.yield_value, row.price) {
        (Some(y), None) => y,
        (None, Some(price)) => calc.solve_yield(&bond, price)?.yield_value,
        (Some(_), Some(_)) => anyhow::bail!("give either yield or price, not both"),
        (None, None) => anyhow::bail!("missing yield or price"),
    };

    let analytics = calc.analytics(&bond, ytm)?;
    debug!(id = ?bond.identifier(), ytm, "valued batch row");

    Ok(BatchResult {
        yield_pct: Some(ytm * 100.0),
        clean_price: Some(analytics.clean_price),
        macaulay_duration: Some(analytics.macaulay_duration),
        modified_duration: Some(analytics.modified_duration),
        convexity: Some(analytics.convexity),
        ..BatchResult::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use bondcalc_bonds::EngineConfig;

    fn ctx() -> Context {
        Context {
            format: OutputFormat::Json,
            engine: EngineConfig::default(),
            pricing_date: None,
        }
    }

    fn parse(csv: &str) -> Vec<Result<BatchRow, String>> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes())
            .deserialize::<BatchRow>()
            .map(|r| r.map_err(|e| e.to_string()))
            .collect()
    }

    #[test]
    fn test_value_rows() {
        let rows = parse(
            "id,issue_date,term_years,coupon_rate,frequency,day_count,yield,price\n\
             A,2021-01-01,2,0.08,2,30/360,0.06,\n\
             B,2021-01-01,5,0.05,,,,103.72\n",
        );
        assert_eq!(rows.len(), 2);

        let a = value_row(1, rows[0].clone(), &ctx());
        assert!(a.error.is_none());
        assert_eq!(a.id.as_deref(), Some("A"));
        assert!((a.clean_price.unwrap() - 103.717).abs() < 1e-3);

        let b = value_row(2, rows[1].clone(), &ctx());
        assert!(b.error.is_none());
        assert!((b.yield_pct.unwrap() - 4.168).abs() < 1e-2);
    }

    #[test]
    fn test_row_errors_are_captured() {
        let rows = parse(
            "id,issue_date,term_years,coupon_rate,yield,price\n\
             bad-freq,2021-01-01,5,0.05,0.06,\n\
             both,2021-01-01,5,0.05,0.06,101\n\
             neither,2021-01-01,5,0.05,,\n\
             no-term,2021-01-01,,0.05,0.06,\n",
        );

        for (i, row) in rows.into_iter().enumerate().skip(1) {
            let result = value_row(i + 1, row, &ctx());
            assert!(result.error.is_some(), "row {} should fail", i + 1);
            assert!(result.clean_price.is_none());
        }
    }

    #[test]
    fn test_unparseable_row() {
        let rows = parse("id,issue_date,term_years,coupon_rate,frequency,yield\nX,2021-01-01,5,0.05,3,0.06\n");
        let result = value_row(1, rows[0].clone(), &ctx());
        assert!(result.error.is_some());
    }
}
