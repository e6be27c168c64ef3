//! Fixed rate bond implementation.
//!
//! A regular fixed coupon bond: every period has the same length, the first
//! period starts at issue and the last ends at maturity. Principal is repaid
//! in full with the final coupon.
//!
//! # Example
//!
//! ```rust
//! use bondcalc_bonds::instruments::FixedRateBond;
//! use bondcalc_bonds::traits::Instrument;
//! use bondcalc_core::daycounts::DayCountConvention;
//! use bondcalc_core::types::{Date, Frequency};
//! use rust_decimal_macros::dec;
//!
//! let bond = FixedRateBond::builder()
//!     .identifier("TEST-5Y")
//!     .issue_date(Date::from_ymd(2021, 1, 1).unwrap())
//!     .term_years(5)
//!     .coupon_rate(dec!(0.05))
//!     .frequency(Frequency::SemiAnnual)
//!     .day_count(DayCountConvention::Thirty360)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bond.payment_dates().len(), 10);
//! assert_eq!(bond.coupon_per_period(), dec!(2.5));
//! ```

use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::{Date, Frequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashflows::payment_dates;
use crate::error::{BondError, BondResult};
use crate::traits::Instrument;

/// Fixed rate bond.
///
/// Immutable once built. Coupon dates are generated and validated by the
/// builder; deserialization goes through the builder as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRateBond {
    identifier: Option<String>,
    issue_date: Date,
    maturity: Date,
    coupon_rate: Decimal,
    principal: Decimal,
    frequency: Frequency,
    day_count: DayCountConvention,
    payment_dates: Vec<Date>,
}

impl FixedRateBond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> FixedRateBondBuilder {
        FixedRateBondBuilder::new()
    }

    /// Returns the number of coupon periods from issue to maturity.
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.payment_dates.len()
    }

    /// Returns the annual coupon amount.
    #[must_use]
    pub fn annual_coupon(&self) -> Decimal {
        self.coupon_rate * self.principal
    }
}

impl Instrument for FixedRateBond {
    fn issue_date(&self) -> Date {
        self.issue_date
    }

    fn maturity(&self) -> Date {
        self.maturity
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    fn principal(&self) -> Decimal {
        self.principal
    }

    fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// Builder for `FixedRateBond`.
///
/// Exactly one of `term_years` and `maturity` is required, along with the
/// issue date and coupon rate. Frequency defaults to semi-annual, day count
/// to 30/360 and principal to 100.
#[derive(Debug, Clone, Default)]
pub struct FixedRateBondBuilder {
    identifier: Option<String>,
    issue_date: Option<Date>,
    maturity: Option<Date>,
    term_years: Option<u32>,
    coupon_rate: Option<Decimal>,
    principal: Option<Decimal>,
    frequency: Option<Frequency>,
    day_count: Option<DayCountConvention>,
}

impl FixedRateBondBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    #[must_use]
    pub fn identifier(mut self, id: impl Into<String>) -> Self {
        self.identifier = Some(id.into());
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the term in whole years from issue.
    #[must_use]
    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    /// Sets the annual coupon rate as a decimal (0.05 = 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the annual coupon rate from a percentage (5.0 = 5%).
    #[must_use]
    pub fn coupon_percent(mut self, percent: Decimal) -> Self {
        self.coupon_rate = Some(percent / Decimal::ONE_HUNDRED);
        self
    }

    /// Sets the principal (face value).
    #[must_use]
    pub fn principal(mut self, value: Decimal) -> Self {
        self.principal = Some(value);
        self
    }

    /// Sets the payment frequency.
    #[must_use]
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, dc: DayCountConvention) -> Self {
        self.day_count = Some(dc);
        self
    }

    /// Builds the `FixedRateBond`.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, values are invalid,
    /// or maturity is not a whole number of periods after issue.
    pub fn build(self) -> BondResult<FixedRateBond> {
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;

        let maturity = match (self.maturity, self.term_years) {
            (Some(maturity), None) => maturity,
            (None, Some(0)) => return Err(BondError::invalid_spec("term_years must be positive")),
            (None, Some(years)) => {
                let months = i32::try_from(years)
                    .ok()
                    .and_then(|y| y.checked_mul(12))
                    .ok_or_else(|| BondError::invalid_spec(format!("term_years {years} is too large")))?;
                issue_date.add_months(months)?
            }
            (Some(maturity), Some(years)) => {
                return Err(BondError::invalid_spec(format!(
                    "give either maturity ({maturity}) or term_years ({years}), not both"
                )))
            }
            (None, None) => return Err(BondError::missing_field("maturity")),
        };

        if coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec("coupon_rate cannot be negative"));
        }
        let principal = self.principal.unwrap_or(Decimal::ONE_HUNDRED);
        if principal <= Decimal::ZERO {
            return Err(BondError::invalid_spec("principal must be positive"));
        }

        let frequency = self.frequency.unwrap_or_default();
        let payment_dates = payment_dates(issue_date, maturity, frequency)?;

        Ok(FixedRateBond {
            identifier: self.identifier,
            issue_date,
            maturity,
            coupon_rate,
            principal,
            frequency,
            day_count: self.day_count.unwrap_or_default(),
            payment_dates,
        })
    }
}

/// Serialized terms of a fixed rate bond. Coupon dates are derived, not stored.
#[derive(Serialize, Deserialize)]
struct FixedRateBondData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    issue_date: Date,
    maturity: Date,
    coupon_rate: Decimal,
    #[serde(default = "default_principal")]
    principal: Decimal,
    #[serde(default)]
    frequency: Frequency,
    #[serde(default)]
    day_count: DayCountConvention,
}

fn default_principal() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Serialize for FixedRateBond {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        FixedRateBondData {
            identifier: self.identifier.clone(),
            issue_date: self.issue_date,
            maturity: self.maturity,
            coupon_rate: self.coupon_rate,
            principal: self.principal,
            frequency: self.frequency,
            day_count: self.day_count,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FixedRateBond {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = FixedRateBondData::deserialize(deserializer)?;

        let mut builder = FixedRateBond::builder()
            .issue_date(data.issue_date)
            .maturity(data.maturity)
            .coupon_rate(data.coupon_rate)
            .principal(data.principal)
            .frequency(data.frequency)
            .day_count(data.day_count);
        if let Some(id) = data.identifier {
            builder = builder.identifier(id);
        }

        builder.build().map_err(serde::de::Error::custom)
    }
}
