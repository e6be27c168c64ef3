//! Bond valuation engine.
//!
//! [`BondCalculator`] prices an [`Instrument`] as of a fixed pricing date,
//! solves for yield from a price, and derives duration and convexity from
//! the same discounted cash-flow vector used for pricing.

use bondcalc_core::types::{Date, Frequency};
use bondcalc_math::solvers::{BisectionSolver, RootFinder};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{BondError, BondResult};
use crate::pricing::discounting::{compounding_divisor, discount_factors};
use crate::traits::Instrument;

/// Sums of present value below this are treated as zero.
const MIN_TOTAL_PRESENT_VALUE: f64 = 1e-10;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Price residual at the returned yield.
    pub residual: f64,
}

/// Price and risk measures computed from one discounted cash-flow vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondAnalytics {
    /// Clean price.
    pub clean_price: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity.
    pub convexity: f64,
}

/// A remaining cash flow with principal folded into the last one.
#[derive(Debug, Clone, Copy)]
struct ScheduledFlow {
    time: f64,
    amount: f64,
}

/// A remaining cash flow after discounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashFlow {
    /// Year fraction from the pricing date.
    pub time: f64,
    /// Coupon, plus principal on the final flow.
    pub amount: f64,
    /// `df^i` for the i-th remaining flow.
    pub discount_factor: f64,
    /// `amount * discount_factor`.
    pub present_value: f64,
}

/// Fixed-income valuation engine.
///
/// Holds the pricing date and the yield-search configuration; every
/// operation is a pure function of its arguments and that state.
///
/// # Example
///
/// ```rust
/// use bondcalc_bonds::prelude::*;
/// use bondcalc_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let issue = Date::from_ymd(2021, 1, 1).unwrap();
/// let bond = FixedRateBond::builder()
///     .issue_date(issue)
///     .term_years(5)
///     .coupon_rate(dec!(0.05))
///     .build()
///     .unwrap();
///
/// let calculator = BondCalculator::new(issue);
/// let result = calculator.solve_yield(&bond, 103.72).unwrap();
/// assert!((result.yield_value - 0.04168).abs() < 0.01);
///
/// let analytics = calculator.analytics(&bond, result.yield_value).unwrap();
/// assert!(analytics.modified_duration < analytics.macaulay_duration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCalculator {
    pricing_date: Date,
    config: EngineConfig,
}

impl BondCalculator {
    /// Creates a calculator with the default configuration.
    #[must_use]
    pub fn new(pricing_date: Date) -> Self {
        Self {
            pricing_date,
            config: EngineConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the pricing date.
    #[must_use]
    pub fn pricing_date(&self) -> Date {
        self.pricing_date
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculates the clean price for a yield.
    ///
    /// Sum of remaining coupons, principal added to the last, each
    /// discounted by `df^i`.
    pub fn clean_price<I>(&self, instrument: &I, yield_value: f64) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        let flows = self.discounted_cash_flows(instrument, yield_value)?;
        Ok(flows.iter().map(|cf| cf.present_value).sum())
    }

    /// Calculates the dirty price: clean price plus accrued interest at `settlement`.
    pub fn dirty_price<I>(&self, instrument: &I, yield_value: f64, settlement: Date) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        Ok(self.clean_price(instrument, yield_value)? + self.accrued_interest(instrument, settlement)?)
    }

    /// Calculates accrued interest at `settlement`.
    ///
    /// Accrues from the latest payment date strictly before settlement (the
    /// issue date for the first period) under the instrument's day count,
    /// as `fraction * coupon_rate * principal / 100`.
    ///
    /// # Errors
    ///
    /// - `BondError::NoPriorPaymentDate` if settlement is on or before issue
    /// - `BondError::SettlementAfterMaturity` if settlement is after maturity
    pub fn accrued_interest<I>(&self, instrument: &I, settlement: Date) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        let maturity = instrument.maturity();
        if settlement > maturity {
            return Err(BondError::SettlementAfterMaturity {
                settlement,
                maturity,
            });
        }

        let previous = instrument.previous_payment_date(settlement)?;
        let fraction = instrument.day_count().year_fraction(previous, settlement);
        let accrued =
            fraction * instrument.coupon_rate() * instrument.principal() / Decimal::ONE_HUNDRED;

        to_f64(accrued)
    }

    /// Calculates Macaulay duration: `Σ(t_i * PV_i) / Σ PV_i`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::DegenerateCashFlow` if the total present value is
    /// zero or not finite.
    pub fn macaulay_duration<I>(&self, instrument: &I, yield_value: f64) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        let flows = self.discounted_cash_flows(instrument, yield_value)?;
        macaulay(&flows)
    }

    /// Calculates modified duration: Macaulay duration over `1 + y/k`.
    pub fn modified_duration<I>(&self, instrument: &I, yield_value: f64) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        let macaulay = self.macaulay_duration(instrument, yield_value)?;
        Ok(modified(macaulay, yield_value, instrument.frequency()))
    }

    /// Calculates convexity: `Σ(t_i² * PV_i / Σ PV)`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::DegenerateCashFlow` if the total present value is
    /// zero or not finite.
    pub fn convexity<I>(&self, instrument: &I, yield_value: f64) -> BondResult<f64>
    where
        I: Instrument + ?Sized,
    {
        let flows = self.discounted_cash_flows(instrument, yield_value)?;
        convexity(&flows)
    }

    /// Calculates price, durations and convexity from a single discounting pass.
    pub fn analytics<I>(&self, instrument: &I, yield_value: f64) -> BondResult<BondAnalytics>
    where
        I: Instrument + ?Sized,
    {
        let flows = self.discounted_cash_flows(instrument, yield_value)?;
        let macaulay_duration = macaulay(&flows)?;

        Ok(BondAnalytics {
            clean_price: flows.iter().map(|cf| cf.present_value).sum(),
            macaulay_duration,
            modified_duration: modified(macaulay_duration, yield_value, instrument.frequency()),
            convexity: convexity(&flows)?,
        })
    }

    /// Solves for the yield that reproduces `observed_price`, by bisection.
    ///
    /// The price residual is measured in units of `min(1, observed_price)`,
    /// so deep-discount prices below one still converge to the configured
    /// yield tolerance instead of stopping on a residual that is small only
    /// in absolute terms. The reported `residual` is in price units.
    ///
    /// # Errors
    ///
    /// - `BondError::Math(MathError::NoBracket)` if the configured bounds do
    ///   not straddle the solution
    /// - `BondError::Math(MathError::DidNotConverge)` if the iteration cap is hit
    /// - `BondError::InvalidConfig` if the configuration is invalid
    pub fn solve_yield<I>(&self, instrument: &I, observed_price: f64) -> BondResult<YieldResult>
    where
        I: Instrument + ?Sized,
    {
        self.solve_yield_with(instrument, observed_price, &BisectionSolver)
    }

    /// Solves for yield with a caller-supplied bracketing root finder.
    pub fn solve_yield_with<I, R>(
        &self,
        instrument: &I,
        observed_price: f64,
        solver: &R,
    ) -> BondResult<YieldResult>
    where
        I: Instrument + ?Sized,
        R: RootFinder,
    {
        self.config.validate()?;
        if !observed_price.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "observed price must be finite, got {observed_price}"
            )));
        }

        let flows = self.scheduled_flows(instrument)?;
        let frequency = instrument.frequency();
        let scale = residual_scale(observed_price);

        let objective = |y: f64| -> f64 {
            (discount(&flows, y, frequency)
                .iter()
                .map(|cf| cf.present_value)
                .sum::<f64>()
                - observed_price)
                / scale
        };

        let result = solver.find_root(
            objective,
            self.config.yield_lower_bound,
            self.config.yield_upper_bound,
            &self.config.solver_config(),
        )?;

        debug!(
            instrument = instrument.identifier().unwrap_or("-"),
            solver = solver.name(),
            observed_price,
            yield_value = result.root,
            iterations = result.iterations,
            "solved yield"
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual * scale,
        })
    }

    /// Returns the discounted cash-flow vector behind price, duration and convexity.
    pub fn cash_flow_table<I>(
        &self,
        instrument: &I,
        yield_value: f64,
    ) -> BondResult<Vec<DiscountedCashFlow>>
    where
        I: Instrument + ?Sized,
    {
        self.discounted_cash_flows(instrument, yield_value)
    }

    /// Remaining flows as `f64`, principal folded into the last one.
    fn scheduled_flows<I>(&self, instrument: &I) -> BondResult<Vec<ScheduledFlow>>
    where
        I: Instrument + ?Sized,
    {
        let schedule = instrument.schedule(self.pricing_date)?;
        let principal = to_f64(instrument.principal())?;

        let mut flows = schedule
            .iter()
            .map(|payment| {
                Ok(ScheduledFlow {
                    time: to_f64(payment.time_in_years)?,
                    amount: to_f64(payment.amount)?,
                })
            })
            .collect::<BondResult<Vec<_>>>()?;

        if let Some(last) = flows.last_mut() {
            last.amount += principal;
        }
        Ok(flows)
    }

    fn discounted_cash_flows<I>(
        &self,
        instrument: &I,
        yield_value: f64,
    ) -> BondResult<Vec<DiscountedCashFlow>>
    where
        I: Instrument + ?Sized,
    {
        let flows = self.scheduled_flows(instrument)?;
        Ok(discount(&flows, yield_value, instrument.frequency()))
    }
}

fn discount(flows: &[ScheduledFlow], yield_value: f64, frequency: Frequency) -> Vec<DiscountedCashFlow> {
    flows
        .iter()
        .zip(discount_factors(yield_value, frequency, flows.len()))
        .map(|(flow, df)| DiscountedCashFlow {
            time: flow.time,
            amount: flow.amount,
            discount_factor: df,
            present_value: flow.amount * df,
        })
        .collect()
}

/// Price units per unit of objective residual: `min(1, |price|)`, never zero.
fn residual_scale(observed_price: f64) -> f64 {
    let scale = observed_price.abs().min(1.0);
    if scale > 0.0 {
        scale
    } else {
        1.0
    }
}

fn total_present_value(flows: &[DiscountedCashFlow]) -> BondResult<f64> {
    let total: f64 = flows.iter().map(|cf| cf.present_value).sum();
    if !total.is_finite() || total.abs() < MIN_TOTAL_PRESENT_VALUE {
        return Err(BondError::DegenerateCashFlow {
            total_present_value: total,
        });
    }
    Ok(total)
}

fn macaulay(flows: &[DiscountedCashFlow]) -> BondResult<f64> {
    let total = total_present_value(flows)?;
    Ok(flows.iter().map(|cf| cf.time * cf.present_value).sum::<f64>() / total)
}

fn modified(macaulay: f64, yield_value: f64, frequency: Frequency) -> f64 {
    macaulay / (1.0 + yield_value / compounding_divisor(frequency))
}

fn convexity(flows: &[DiscountedCashFlow]) -> BondResult<f64> {
    let total = total_present_value(flows)?;
    Ok(flows
        .iter()
        .map(|cf| cf.time * cf.time * cf.present_value / total)
        .sum())
}

fn to_f64(value: Decimal) -> BondResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| BondError::invalid_spec(format!("{value} cannot be represented as f64")))
}
