//! CLI command implementations.

pub mod accrued;
pub mod batch;
pub mod config;
pub mod daycount;
pub mod price;
pub mod risk;
pub mod yield_cmd;

// Re-export submodules for convenience
pub use accrued::AccruedArgs;
pub use batch::BatchArgs;
pub use config::ConfigArgs;
pub use daycount::DaycountArgs;
pub use price::PriceArgs;
pub use risk::RiskArgs;
pub use yield_cmd::YieldArgs;

use anyhow::Result;
use bondcalc_bonds::{BondCalculator, EngineConfig, FixedRateBond, Instrument};
use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::{Date, Frequency};
use clap::Args;
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::KeyValue;

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Engine configuration.
    pub engine: EngineConfig,
    /// Pricing date override.
    pub pricing_date: Option<Date>,
}

impl Context {
    /// Returns a calculator priced at the override date, else the bond's issue date.
    pub fn calculator<I: Instrument + ?Sized>(&self, bond: &I) -> BondCalculator {
        BondCalculator::new(self.pricing_date.unwrap_or_else(|| bond.issue_date()))
            .with_config(self.engine)
    }
}

/// Bond terms shared by the valuation commands.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issue: Date,

    /// Term in whole years from issue
    #[arg(short, long, required_unless_present = "maturity", conflicts_with = "maturity")]
    pub term: Option<u32>,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: Option<Date>,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: Decimal,

    /// Payment frequency: 1, 2, 4, 12 or annual, semiannual, quarterly, monthly
    #[arg(long, default_value = "2")]
    pub frequency: Frequency,

    /// Day count convention: 30/360, ACT/360, ACT/ACT
    #[arg(long, default_value = "30/360")]
    pub day_count: DayCountConvention,

    /// Principal (face value)
    #[arg(long, default_value = "100")]
    pub principal: Decimal,

    /// Identifier shown in output
    #[arg(long)]
    pub id: Option<String>,
}

impl BondArgs {
    /// Builds the bond described by the arguments.
    pub fn build(&self) -> Result<FixedRateBond> {
        let coupon = validate_coupon(self.coupon)?;

        let mut builder = FixedRateBond::builder()
            .issue_date(self.issue)
            .coupon_percent(coupon)
            .principal(self.principal)
            .frequency(self.frequency)
            .day_count(self.day_count);

        builder = match (self.term, self.maturity) {
            (Some(term), _) => builder.term_years(term),
            (None, Some(maturity)) => builder.maturity(maturity),
            (None, None) => return Err(CliError::MissingArgument("--term or --maturity".into()).into()),
        };
        if let Some(ref id) = self.id {
            builder = builder.identifier(id.clone());
        }

        Ok(builder.build()?)
    }
}

/// Rows describing a bond and the date it is priced at.
pub fn bond_rows(bond: &FixedRateBond, calc: &BondCalculator) -> Vec<KeyValue> {
    let mut rows = Vec::new();
    if let Some(id) = bond.identifier() {
        rows.push(KeyValue::new("Identifier", id));
    }
    rows.push(KeyValue::new("Issue Date", bond.issue_date().to_string()));
    rows.push(KeyValue::new("Maturity", bond.maturity().to_string()));
    rows.push(KeyValue::new(
        "Coupon",
        format!("{}%", (bond.coupon_rate() * Decimal::ONE_HUNDRED).normalize()),
    ));
    rows.push(KeyValue::new("Frequency", bond.frequency().to_string()));
    rows.push(KeyValue::new("Day Count", bond.day_count().to_string()));
    rows.push(KeyValue::new("Principal", bond.principal().normalize().to_string()));
    rows.push(KeyValue::new("Pricing Date", calc.pricing_date().to_string()));
    rows
}

/// Validates a coupon rate given as a percentage.
pub fn validate_coupon(coupon: Decimal) -> CliResult<Decimal> {
    if coupon < Decimal::ZERO || coupon > Decimal::ONE_HUNDRED {
        return Err(CliError::InvalidCoupon(coupon.to_string()));
    }
    Ok(coupon)
}

/// Validates a yield given as a percentage.
pub fn validate_yield(yield_pct: f64) -> CliResult<f64> {
    if !(yield_pct.is_finite() && yield_pct > -100.0) {
        return Err(CliError::InvalidYield(yield_pct));
    }
    Ok(yield_pct)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}
